use crate::api::models::Credentials;
use crate::api::validation::require;
use crate::api::ClientError;
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub account: String,
    pub password: String,
    pub request: RequestSlot<Credentials>,
    pub notice: Option<Notice>,
    /// Set once the token is stored; the host navigates home on it.
    pub signed_in: bool,
}

impl UiState for LoginState {}

#[derive(Debug)]
pub enum LoginIntent {
    SetAccount(String),
    SetPassword(String),
    Submit,
    Completed {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    DismissNotice,
    Leave,
}

impl Intent for LoginIntent {}

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::SetAccount(account) => state.account = account,
            LoginIntent::SetPassword(password) => state.password = password,
            LoginIntent::Submit => {
                if state.request.is_busy() {
                    return state;
                }
                let checked = require("account", &state.account)
                    .and_then(|_| require("password", &state.password));
                match checked {
                    Ok(()) => {
                        state.notice = None;
                        state.request.issue(Credentials {
                            account: state.account.trim().to_string(),
                            password: state.password.clone(),
                        });
                    }
                    Err(err) => state.notice = Some(Notice::from_error(&err, "")),
                }
            }
            LoginIntent::Completed { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state.password.clear();
                        state.signed_in = true;
                    }
                    Err(ClientError::Api { .. }) => {
                        state.notice = Some(Notice::error(
                            "Login Failed",
                            "Invalid account or password.",
                        ));
                    }
                    Err(err) => state.notice = Some(Notice::from_error(&err, "Login failed.")),
                }
            }
            LoginIntent::DismissNotice => state.notice = None,
            LoginIntent::Leave => {
                state.request.cancel();
                state.password.clear();
                state.signed_in = false;
            }
        }
        state
    }
}
