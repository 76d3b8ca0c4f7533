/// Top-level screens. Navigation is tab based; there are no URL routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Login,
    Signup,
    Projects,
    Tasks,
    Users,
    ApiStatus,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::Login,
        Tab::Signup,
        Tab::Projects,
        Tab::Tasks,
        Tab::Users,
        Tab::ApiStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Home",
            Tab::Login => "Login",
            Tab::Signup => "Sign up",
            Tab::Projects => "Projects",
            Tab::Tasks => "Tasks",
            Tab::Users => "Users",
            Tab::ApiStatus => "API status",
        }
    }

    /// Login, signup and API status are reached from navbar buttons instead.
    pub fn in_navbar(self) -> bool {
        !matches!(self, Tab::Login | Tab::Signup | Tab::ApiStatus)
    }

    pub fn navbar_tabs() -> impl Iterator<Item = Tab> {
        Self::ALL.into_iter().filter(|tab| tab.in_navbar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_hides_auth_and_status_tabs() {
        let shown: Vec<_> = Tab::navbar_tabs().collect();
        assert_eq!(
            shown,
            vec![Tab::Overview, Tab::Projects, Tab::Tasks, Tab::Users]
        );
        assert_eq!(Tab::default(), Tab::Overview);
    }
}
