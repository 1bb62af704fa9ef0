use crate::api::validation::require;
use crate::api::{ClientError, Registration};
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterState {
    pub username: String,
    pub account: String,
    pub email: String,
    pub password: String,
    pub request: RequestSlot<Registration>,
    pub notice: Option<Notice>,
    pub registered: bool,
}

impl UiState for RegisterState {}

#[derive(Debug)]
pub enum RegisterIntent {
    SetUsername(String),
    SetAccount(String),
    SetEmail(String),
    SetPassword(String),
    Submit,
    Completed {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    DismissNotice,
    Leave,
}

impl Intent for RegisterIntent {}

pub struct RegisterReducer;

impl Reducer for RegisterReducer {
    type State = RegisterState;
    type Intent = RegisterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegisterIntent::SetUsername(v) => state.username = v,
            RegisterIntent::SetAccount(v) => state.account = v,
            RegisterIntent::SetEmail(v) => state.email = v,
            RegisterIntent::SetPassword(v) => state.password = v,
            RegisterIntent::Submit => {
                if state.request.is_busy() {
                    return state;
                }
                let checked = require("username", &state.username)
                    .and_then(|_| require("account", &state.account))
                    .and_then(|_| require("email", &state.email))
                    .and_then(|_| require("password", &state.password));
                if let Err(err) = checked {
                    state.notice = Some(Notice::from_error(&err, ""));
                    return state;
                }
                state.notice = None;
                state.request.issue(Registration {
                    username: state.username.trim().to_string(),
                    account: state.account.trim().to_string(),
                    email: state.email.trim().to_string(),
                    password: state.password.clone(),
                });
            }
            RegisterIntent::Completed { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state = RegisterState {
                            request: state.request,
                            registered: true,
                            notice: Some(Notice::success(
                                "Success",
                                "Registration successful. Please log in.",
                            )),
                            ..RegisterState::default()
                        };
                    }
                    Err(ClientError::Api { .. }) => {
                        state.notice = Some(Notice::error(
                            "Registration failed",
                            "Please check your input.",
                        ));
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Registration failed."))
                    }
                }
            }
            RegisterIntent::DismissNotice => state.notice = None,
            RegisterIntent::Leave => {
                state.request.cancel();
                state.registered = false;
            }
        }
        state
    }
}
