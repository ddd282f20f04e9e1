use crate::date_key;
use crate::models::{Habit, HabitView, Workspace};
use crate::streak::compute_streak;
use chrono::NaiveDate;

pub fn habit_view_at(today: NaiveDate, workspace: &Workspace, habit: &Habit) -> HabitView {
    let today_key = date_key::encode(today);
    HabitView {
        id: habit.id,
        title: habit.title.clone(),
        category_id: habit.category_id,
        category_name: habit
            .category_id
            .and_then(|id| workspace.categories.get(&id))
            .map(|category| category.name.clone()),
        marked_days: habit.marked_days.iter().cloned().collect(),
        streak: compute_streak(&habit.marked_days, today),
        marked_today: habit.marked_days.contains(today_key.as_str()),
    }
}

/// Views for every habit, oldest first.
pub fn habit_views_at(today: NaiveDate, workspace: Option<&Workspace>) -> Vec<HabitView> {
    let Some(workspace) = workspace else {
        return Vec::new();
    };
    workspace
        .habits
        .values()
        .map(|habit| habit_view_at(today, workspace, habit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reports_streak_and_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut workspace = Workspace::default();
        workspace.create_category(5, "Health").unwrap();
        workspace.create_habit(1, "Gym", Some(5)).unwrap();
        workspace.create_habit(2, "Read", None).unwrap();
        workspace.toggle_day(1, "03010-24", today).unwrap();
        workspace.toggle_day(1, "03609-24", today).unwrap();
        workspace.toggle_day(2, "03609-24", today).unwrap();

        let views = habit_views_at(today, Some(&workspace));
        assert_eq!(views.len(), 2);

        assert_eq!(views[0].id, 1);
        assert_eq!(views[0].streak, 2);
        assert!(views[0].marked_today);
        assert_eq!(views[0].category_name.as_deref(), Some("Health"));

        assert_eq!(views[1].id, 2);
        assert_eq!(views[1].streak, 1);
        assert!(!views[1].marked_today);
        assert_eq!(views[1].category_name, None);
    }

    #[test]
    fn missing_workspace_has_no_views() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(habit_views_at(today, None).is_empty());
    }

    #[test]
    fn streak_is_recomputed_as_days_pass() {
        let mut workspace = Workspace::default();
        workspace.create_habit(1, "Gym", None).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        workspace.toggle_day(1, "03010-24", today).unwrap();

        let habit = workspace.habit(1).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        let later = tomorrow.succ_opt().unwrap();
        assert_eq!(habit_view_at(today, &workspace, habit).streak, 1);
        assert_eq!(habit_view_at(tomorrow, &workspace, habit).streak, 1);
        assert_eq!(habit_view_at(later, &workspace, habit).streak, 0);
    }
}
