use anyhow::{Context, Result};
use crossterm::event::Event;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

use crate::auth::{AuthClient, Session};
use crate::components::{
    Component, ComponentAction, ForgotPasswordComponent, HomeComponent, LoginComponent,
    RegisterComponent,
};
use crate::config::Config;
use crate::groups::GroupsClient;
use crate::tui::Tui;
use crate::ui::Screen;

/// Main application state: the navigation shell and the event loop.
pub struct App {
    tui: Tui,
    runtime: Runtime,
    should_quit: bool,
    current_screen: Screen,
    /// Track the last screen to detect screen transitions
    last_screen: Option<Screen>,
    session: Option<Session>,
    auth_client: AuthClient,
    groups_client: GroupsClient,
    login: LoginComponent,
    register: RegisterComponent,
    forgot_password: ForgotPasswordComponent,
    home: HomeComponent,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let tui = Tui::new()?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let auth_client = AuthClient::new(&config.supabase.url, &config.supabase.anon_key);
        let groups_client = GroupsClient::new(&config.supabase.url, &config.supabase.anon_key);

        Ok(Self {
            tui,
            runtime,
            should_quit: false,
            current_screen: Screen::Login,
            last_screen: None,
            session: None,
            auth_client,
            groups_client,
            login: LoginComponent::new(),
            register: RegisterComponent::new(),
            forgot_password: ForgotPasswordComponent::new(),
            home: HomeComponent::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Main event loop
        loop {
            self.on_screen_transition();
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Detect screen changes; entering Home mounts the listing fresh and
    /// issues its single fetch.
    fn on_screen_transition(&mut self) {
        let current = self.current_screen;
        if self.last_screen == Some(current) {
            return;
        }
        info!("Screen transition: {:?} -> {:?}", self.last_screen, current);
        if current == Screen::Home {
            self.home.reset();
            self.load_groups();
        }
        self.last_screen = Some(current);
    }

    fn draw(&mut self) -> Result<()> {
        let screen = self.current_screen;
        let Self {
            tui,
            login,
            register,
            forgot_password,
            home,
            ..
        } = self;

        tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let result = match screen {
                Screen::Login => login.render(frame, area),
                Screen::Register => register.render(frame, area),
                Screen::ForgotPassword => forgot_password.render(frame, area),
                Screen::Home => home.render(frame, area),
            };
            if let Err(e) = result {
                error!("Render error on {:?}: {}", screen, e);
            }
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match self.current_screen {
            Screen::Login => self.login.handle_event(event)?,
            Screen::Register => self.register.handle_event(event)?,
            Screen::ForgotPassword => self.forgot_password.handle_event(event)?,
            Screen::Home => self.home.handle_event(event)?,
        };
        self.apply_action(action);
        Ok(())
    }

    fn apply_action(&mut self, action: ComponentAction) {
        match action {
            ComponentAction::Navigate(screen) => {
                self.current_screen = screen;
            }
            ComponentAction::Quit => {
                self.should_quit = true;
            }
            ComponentAction::Submit => self.submit_current_screen(),
            ComponentAction::None | ComponentAction::Update => {}
        }
    }

    /// Run the network call for the active screen and feed the outcome
    /// back to its component. The blocking call means one outstanding
    /// request per user action.
    fn submit_current_screen(&mut self) {
        match self.current_screen {
            Screen::Login => {
                let email = self.login.email().to_string();
                let password = self.login.password().to_string();
                let result = self
                    .runtime
                    .block_on(self.auth_client.sign_in(&email, &password));
                if let Ok(session) = &result {
                    self.session = Some(session.clone());
                }
                let action = self.login.apply_sign_in(&result);
                self.apply_action(action);
            }
            Screen::Register => {
                // Local validation short-circuits before any network call
                if let Some(message) = self.register.local_validation_error() {
                    self.register.apply_local_error(message);
                    return;
                }
                let email = self.register.email().to_string();
                let password = self.register.password().to_string();
                let result = self
                    .runtime
                    .block_on(self.auth_client.sign_up(&email, &password));
                let action = self.register.apply_sign_up(&result);
                self.apply_action(action);
            }
            Screen::ForgotPassword => {
                let email = self.forgot_password.email().to_string();
                let result = self
                    .runtime
                    .block_on(self.auth_client.request_password_reset(&email));
                let action = self.forgot_password.apply_reset(&result);
                self.apply_action(action);
            }
            // Home never submits; its fetch runs on screen entry
            Screen::Home => {}
        }
    }

    fn load_groups(&mut self) {
        let Some(session) = &self.session else {
            // Home is only reachable through a successful sign-in
            error!("Home entered without a session");
            return;
        };
        let result = self
            .runtime
            .block_on(self.groups_client.fetch_groups(session));
        self.home.apply_fetch(result);
    }
}
