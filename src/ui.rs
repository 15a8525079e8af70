/// Application screens.
///
/// The shell starts at `Login` and has no terminal state. Transitions:
/// - `Login` → `Home` on successful authentication
/// - `Login` → `Register` / `ForgotPassword` on explicit intent
/// - `Register` → `Login` on successful registration or back-intent
/// - `ForgotPassword` → `Login` on back-intent (a successful reset request
///   stays on the screen and shows the confirmation message)
/// - `Home` has no outbound transition; quitting exits the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    ForgotPassword,
    Home,
}
