use crate::api::models::PasswordChange;
use crate::api::{ClientError, User};
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountRequest {
    LoadUser,
    ChangePassword(PasswordChange),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountState {
    pub user: Option<User>,
    /// Open while the user is changing their password.
    pub password_form: Option<PasswordForm>,
    pub request: RequestSlot<AccountRequest>,
    pub notice: Option<Notice>,
    /// Token is gone; the host sends the user back to login.
    pub signed_out: bool,
}

impl UiState for AccountState {}

#[derive(Debug)]
pub enum AccountIntent {
    Refresh,
    UserLoaded {
        ticket: Ticket,
        result: Result<User, ClientError>,
    },
    ShowPasswordForm,
    HidePasswordForm,
    SetOldPassword(String),
    SetNewPassword(String),
    SubmitPassword,
    PasswordChanged {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    Logout,
    LoggedOut {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    DismissNotice,
    Leave,
}

impl Intent for AccountIntent {}

pub struct AccountReducer;

impl Reducer for AccountReducer {
    type State = AccountState;
    type Intent = AccountIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AccountIntent::Refresh => {
                state.request.issue(AccountRequest::LoadUser);
            }
            AccountIntent::UserLoaded { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(user) => state.user = Some(user),
                    Err(err) => {
                        state.notice = Some(Notice::from_error(
                            &err,
                            "Failed to load user information.",
                        ))
                    }
                }
            }
            AccountIntent::ShowPasswordForm => {
                state.password_form.get_or_insert_with(PasswordForm::default);
            }
            AccountIntent::HidePasswordForm => state.password_form = None,
            AccountIntent::SetOldPassword(v) => {
                if let Some(form) = state.password_form.as_mut() {
                    form.old_password = v;
                }
            }
            AccountIntent::SetNewPassword(v) => {
                if let Some(form) = state.password_form.as_mut() {
                    form.new_password = v;
                }
            }
            AccountIntent::SubmitPassword => {
                let Some(form) = state.password_form.as_ref() else {
                    return state;
                };
                if form.old_password.is_empty() || form.new_password.is_empty() {
                    state.notice = Some(Notice::error(
                        "Error",
                        "Please enter both current and new password.",
                    ));
                    return state;
                }
                let change = PasswordChange {
                    old_password: form.old_password.clone(),
                    new_password: form.new_password.clone(),
                };
                state.notice = None;
                state.request.issue(AccountRequest::ChangePassword(change));
            }
            AccountIntent::PasswordChanged { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                state.notice = Some(match result {
                    Ok(()) => {
                        state.password_form = None;
                        state.user = None;
                        state.signed_out = true;
                        Notice::success(
                            "Success",
                            "Password updated successfully. Please log in again.",
                        )
                    }
                    Err(err) if err.status() == Some(400) => Notice::error(
                        "Error",
                        err.detail().unwrap_or("Old password incorrect."),
                    ),
                    Err(err) => Notice::from_error(&err, "Failed to update password."),
                });
            }
            AccountIntent::Logout => {
                state.request.issue(AccountRequest::Logout);
            }
            AccountIntent::LoggedOut { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state.user = None;
                        state.password_form = None;
                        state.signed_out = true;
                    }
                    Err(_) => {
                        state.notice = Some(Notice::error(
                            "Error",
                            "Failed to log out. Please try again.",
                        ))
                    }
                }
            }
            AccountIntent::DismissNotice => state.notice = None,
            AccountIntent::Leave => {
                state.request.cancel();
                state.password_form = None;
                state.signed_out = false;
            }
        }
        state
    }
}
