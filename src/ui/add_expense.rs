use crate::api::{Budget, BudgetId, ClientError, NewExpense};
use crate::ui::mvi::{Intent, Reducer, RequestSlot, Ticket, UiState};
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum AddExpenseRequest {
    LoadBudgets,
    Create(NewExpense),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddExpenseState {
    pub description: String,
    pub amount: String,
    /// Budgets offered in the picker.
    pub budgets: Vec<Budget>,
    pub selected_budget: Option<BudgetId>,
    pub request: RequestSlot<AddExpenseRequest>,
    pub notice: Option<Notice>,
}

impl UiState for AddExpenseState {}

#[derive(Debug)]
pub enum AddExpenseIntent {
    SetDescription(String),
    SetAmount(String),
    SelectBudget(BudgetId),
    Refresh,
    Submit,
    BudgetsLoaded {
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

impl Intent for AddExpenseIntent {}

pub struct AddExpenseReducer;

impl Reducer for AddExpenseReducer {
    type State = AddExpenseState;
    type Intent = AddExpenseIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddExpenseIntent::SetDescription(v) => state.description = v,
            AddExpenseIntent::SetAmount(v) => state.amount = v,
            AddExpenseIntent::SelectBudget(id) => state.selected_budget = Some(id),
            AddExpenseIntent::Refresh => {
                state.request.issue(AddExpenseRequest::LoadBudgets);
            }
            AddExpenseIntent::Submit => {
                if matches!(state.request.pending(), Some((_, AddExpenseRequest::Create(_)))) {
                    return state;
                }
                match NewExpense::parse(&state.description, &state.amount, state.selected_budget)
                {
                    Ok(expense) => {
                        state.notice = None;
                        state.request.issue(AddExpenseRequest::Create(expense));
                    }
                    Err(err) => state.notice = Some(Notice::from_error(&err, "")),
                }
            }
            AddExpenseIntent::BudgetsLoaded { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(budgets) => {
                        let still_listed = state
                            .selected_budget
                            .is_some_and(|id| budgets.iter().any(|b| b.id == id));
                        if !still_listed {
                            state.selected_budget = budgets.first().map(|b| b.id);
                        }
                        state.budgets = budgets;
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to load budgets."))
                    }
                }
            }
            AddExpenseIntent::Created { ticket, result } => {
                if state.request.settle(ticket).is_none() {
                    return state;
                }
                match result {
                    Ok(()) => {
                        state.description.clear();
                        state.amount.clear();
                        state.notice =
                            Some(Notice::success("Success", "Expense added successfully."));
                    }
                    Err(err) => {
                        state.notice = Some(Notice::from_error(&err, "Failed to add expense."))
                    }
                }
            }
            AddExpenseIntent::DismissNotice => state.notice = None,
            AddExpenseIntent::Leave => state.request.cancel(),
        }
        state
    }
}
