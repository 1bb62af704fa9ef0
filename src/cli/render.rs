use crate::api::{Budget, BudgetStatus, Expense};
use crate::ui::{Notice, NoticeLevel};

pub fn budget_line(budget: &Budget) -> String {
    let status = match budget.status() {
        BudgetStatus::Remaining(left) => format!("Remaining: ${:.2}", left),
        BudgetStatus::Over(over) => format!("Over Budget: ${:.2}", over),
    };
    format!(
        "#{} {}: ${:.2} | Spent: ${:.2} | {}",
        budget.id,
        budget.period(),
        budget.amount,
        budget.total_spent,
        status
    )
}

pub fn expense_line(expense: &Expense) -> String {
    let mut line = format!(
        "#{} {} ${:.2}",
        expense.id, expense.description, expense.amount
    );
    match (expense.budget, expense.budget_id) {
        (Some(period), _) => line.push_str(&format!(" (Budget: {})", period)),
        (None, Some(id)) => line.push_str(&format!(" (Budget #{})", id)),
        (None, None) => {}
    }
    line
}

pub fn notice_line(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => notice.message.clone(),
        NoticeLevel::Error => notice.to_string(),
    }
}
