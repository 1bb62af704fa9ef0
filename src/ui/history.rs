use crate::api::{ClientError, Expense, ExpenseId, ExpenseUpdate};
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRequest {
    Load,
    Delete(ExpenseId),
    Update(ExpenseId, ExpenseUpdate),
}

/// Edit form for one expense, seeded from the list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEditor {
    pub id: ExpenseId,
    pub description: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    pub expenses: Vec<Expense>,
    pub editing: Option<ExpenseEditor>,
    pub request: RequestSlot<HistoryRequest>,
    pub notice: Option<Notice>,
}

impl UiState for HistoryState {}

impl HistoryState {
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }
}

#[derive(Debug)]
pub enum HistoryIntent {
    Refresh,
    Loaded {
        ticket: Ticket,
        result: Result<Vec<Expense>, ClientError>,
    },
    Delete(ExpenseId),
    Deleted {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    BeginEdit(ExpenseId),
    SetDescription(String),
    SetAmount(String),
    CancelEdit,
    SaveEdit,
    Updated {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    DismissNotice,
    Leave,
}

impl Intent for HistoryIntent {}

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryState;
    type Intent = HistoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::Refresh => {
                state.request.issue(HistoryRequest::Load);
            }
            HistoryIntent::Loaded { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(expenses) => state.expenses = expenses,
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to fetch expenses."))
                    }
                }
            }
            HistoryIntent::Delete(id) => {
                state.request.issue(HistoryRequest::Delete(id));
            }
            HistoryIntent::Deleted { ticket, result } => {
                let Some(HistoryRequest::Delete(id)) = state.request.settle(ticket) else {
                    return state;
                };
                match result {
                    Ok(()) => {
                        state.expenses.retain(|e| e.id != id);
                        if state.editing.as_ref().is_some_and(|ed| ed.id == id) {
                            state.editing = None;
                        }
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to delete expense."))
                    }
                }
            }
            HistoryIntent::BeginEdit(id) => {
                let editor = state.find(id).map(|expense| ExpenseEditor {
                    id,
                    description: expense.description.clone(),
                    amount: expense.amount.to_string(),
                });
                match editor {
                    Some(editor) => state.editing = Some(editor),
                    None => state.notice = Some(Notice::error("Error", "Expense not found.")),
                }
            }
            HistoryIntent::SetDescription(v) => {
                if let Some(editor) = state.editing.as_mut() {
                    editor.description = v;
                }
            }
            HistoryIntent::SetAmount(v) => {
                if let Some(editor) = state.editing.as_mut() {
                    editor.amount = v;
                }
            }
            HistoryIntent::CancelEdit => state.editing = None,
            HistoryIntent::SaveEdit => {
                let Some(editor) = state.editing.as_ref() else {
                    return state;
                };
                match ExpenseUpdate::parse(&editor.description, &editor.amount) {
                    Ok(update) => {
                        let id = editor.id;
                        state.notice = None;
                        state.request.issue(HistoryRequest::Update(id, update));
                    }
                    Err(err) => state.notice = Some(Notice::from_error(&err, "")),
                }
            }
            HistoryIntent::Updated { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state.editing = None;
                        state.request.issue(HistoryRequest::Load);
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to update expense."))
                    }
                }
            }
            HistoryIntent::DismissNotice => state.notice = None,
            HistoryIntent::Leave => {
                state.request.cancel();
                state.editing = None;
            }
        }
        state
    }
}
