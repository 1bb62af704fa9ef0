//! Route state for the navigation shell.

use crate::ui::mvi::{Intent, Reducer, UiState};

/// Tabs of the signed-in home screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    AddExpense,
    History,
    Budget,
    Account,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::AddExpense, Tab::History, Tab::Budget, Tab::Account]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Register,
    Home(Tab),
}

impl Route {
    /// Where the app opens: home when a token is stored, login otherwise.
    pub fn initial(has_session: bool) -> Self {
        if has_session {
            Route::Home(Tab::AddExpense)
        } else {
            Route::Login
        }
    }

    pub fn tab(&self) -> Option<Tab> {
        match self {
            Route::Home(tab) => Some(*tab),
            _ => None,
        }
    }
}

impl UiState for Route {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    ShowLogin,
    ShowRegister,
    /// Login succeeded: reset to the first home tab.
    SignedIn,
    /// Logout or forced re-authentication.
    SignedOut,
    /// Registration succeeded: go to login.
    Registered,
    SelectTab(Tab),
}

impl Intent for NavIntent {}

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = Route;
    type Intent = NavIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::ShowLogin | NavIntent::SignedOut | NavIntent::Registered => Route::Login,
            NavIntent::ShowRegister => Route::Register,
            NavIntent::SignedIn => Route::Home(Tab::AddExpense),
            // Not gated on session presence: the server rejects
            // unauthenticated requests.
            NavIntent::SelectTab(tab) => Route::Home(tab),
        }
    }
}
