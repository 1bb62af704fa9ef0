use chrono::Datelike;

use crate::api::{Budget, ClientError, NewBudget};
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum BudgetRequest {
    Load,
    Create(NewBudget),
}

/// Budget list plus the "create budget" form.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    pub amount: String,
    pub year: i32,
    pub month: u32,
    pub budgets: Vec<Budget>,
    pub request: RequestSlot<BudgetRequest>,
    pub notice: Option<Notice>,
}

impl Default for BudgetState {
    /// Empty form preset to the current month.
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            amount: String::new(),
            year: today.year(),
            month: today.month(),
            budgets: Vec::new(),
            request: RequestSlot::default(),
            notice: None,
        }
    }
}

impl UiState for BudgetState {}

impl BudgetState {
    pub fn is_creating(&self) -> bool {
        matches!(self.request.pending(), Some((_, BudgetRequest::Create(_))))
    }
}

#[derive(Debug)]
pub enum BudgetIntent {
    SetAmount(String),
    SetYear(i32),
    SetMonth(u32),
    Refresh,
    Submit,
    Loaded {
        ticket: Ticket,
        result: Result<Vec<Budget>, ClientError>,
    },
    Created {
        ticket: Ticket,
        result: Result<(), ClientError>,
    },
    DismissNotice,
    Leave,
}

impl Intent for BudgetIntent {}

pub struct BudgetReducer;

impl Reducer for BudgetReducer {
    type State = BudgetState;
    type Intent = BudgetIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BudgetIntent::SetAmount(amount) => state.amount = amount,
            BudgetIntent::SetYear(year) => state.year = year,
            BudgetIntent::SetMonth(month) => state.month = month,
            BudgetIntent::Refresh => {
                state.request.issue(BudgetRequest::Load);
            }
            BudgetIntent::Submit => {
                if state.is_creating() {
                    return state;
                }
                match NewBudget::parse(&state.amount, state.year, state.month) {
                    Ok(budget) => {
                        state.notice = None;
                        state.request.issue(BudgetRequest::Create(budget));
                    }
                    Err(err) => state.notice = Some(Notice::from_error(&err, "")),
                }
            }
            BudgetIntent::Loaded { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(budgets) => state.budgets = budgets,
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to load budgets."))
                    }
                }
            }
            BudgetIntent::Created { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state.amount.clear();
                        state.notice =
                            Some(Notice::success("Success", "Budget created successfully."));
                        // Re-fetch rather than merge: totals are server-computed.
                        state.request.issue(BudgetRequest::Load);
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to create budget."))
                    }
                }
            }
            BudgetIntent::DismissNotice => state.notice = None,
            BudgetIntent::Leave => state.request.cancel(),
        }
        state
    }
}
