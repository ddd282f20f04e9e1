use crate::date_key::{self, DateKeyError};
use crate::models::{Category, Habit, Workspace};
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit {0} not found")]
    HabitNotFound(u64),
    #[error("category {0} not found")]
    CategoryNotFound(u64),
    #[error("habit title must not be empty")]
    EmptyTitle,
    #[error("category name must not be empty")]
    EmptyCategoryName,
    #[error("{0} is after today and cannot be marked")]
    FutureDay(NaiveDate),
    #[error(transparent)]
    DateKey(#[from] DateKeyError),
}

impl Workspace {
    pub fn create_habit(
        &mut self,
        id: u64,
        title: &str,
        category_id: Option<u64>,
    ) -> Result<&Habit, HabitError> {
        let title = clean_title(title)?;
        if let Some(category_id) = category_id {
            self.ensure_category(category_id)?;
        }
        let habit = self.habits.entry(id).or_insert(Habit {
            id,
            title,
            category_id,
            marked_days: Default::default(),
        });
        Ok(habit)
    }

    pub fn habit(&self, id: u64) -> Result<&Habit, HabitError> {
        self.habits.get(&id).ok_or(HabitError::HabitNotFound(id))
    }

    fn habit_mut(&mut self, id: u64) -> Result<&mut Habit, HabitError> {
        self.habits.get_mut(&id).ok_or(HabitError::HabitNotFound(id))
    }

    pub fn rename_habit(&mut self, id: u64, title: &str) -> Result<&Habit, HabitError> {
        let title = clean_title(title)?;
        let habit = self.habit_mut(id)?;
        habit.title = title;
        Ok(habit)
    }

    pub fn assign_category(
        &mut self,
        id: u64,
        category_id: Option<u64>,
    ) -> Result<&Habit, HabitError> {
        if let Some(category_id) = category_id {
            self.ensure_category(category_id)?;
        }
        let habit = self.habit_mut(id)?;
        habit.category_id = category_id;
        Ok(habit)
    }

    /// Flips membership of one day. Returns whether the day is marked afterwards.
    pub fn toggle_day(&mut self, id: u64, key: &str, today: NaiveDate) -> Result<bool, HabitError> {
        let date = date_key::parse_date(key)?;
        if date > today {
            return Err(HabitError::FutureDay(date));
        }
        let canonical = date_key::encode(date).into_string();

        let habit = self.habit_mut(id)?;
        if habit.marked_days.remove(&canonical) {
            Ok(false)
        } else {
            habit.marked_days.insert(canonical);
            Ok(true)
        }
    }

    pub fn delete_habit(&mut self, id: u64) -> Result<Habit, HabitError> {
        self.habits.remove(&id).ok_or(HabitError::HabitNotFound(id))
    }

    pub fn create_category(&mut self, id: u64, name: &str) -> Result<&Category, HabitError> {
        let name = clean_name(name)?;
        Ok(self.categories.entry(id).or_insert(Category { id, name }))
    }

    pub fn rename_category(&mut self, id: u64, name: &str) -> Result<&Category, HabitError> {
        let name = clean_name(name)?;
        let category = self
            .categories
            .get_mut(&id)
            .ok_or(HabitError::CategoryNotFound(id))?;
        category.name = name;
        Ok(category)
    }

    /// Removes the category and clears it from every habit that pointed at it.
    pub fn delete_category(&mut self, id: u64) -> Result<Category, HabitError> {
        let category = self
            .categories
            .remove(&id)
            .ok_or(HabitError::CategoryNotFound(id))?;
        for habit in self.habits.values_mut() {
            if habit.category_id == Some(id) {
                habit.category_id = None;
            }
        }
        Ok(category)
    }

    fn ensure_category(&self, id: u64) -> Result<(), HabitError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(HabitError::CategoryNotFound(id))
        }
    }
}

fn clean_title(title: &str) -> Result<String, HabitError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(HabitError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn clean_name(name: &str) -> Result<String, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyCategoryName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn create_trims_title_and_starts_unmarked() {
        let mut workspace = Workspace::default();
        let habit = workspace.create_habit(1, "  Read 30 minutes ", None).unwrap();
        assert_eq!(habit.title, "Read 30 minutes");
        assert!(habit.marked_days.is_empty());
        assert!(habit.category_id.is_none());
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut workspace = Workspace::default();
        assert!(matches!(
            workspace.create_habit(1, "   ", None),
            Err(HabitError::EmptyTitle)
        ));
        workspace.create_habit(1, "Gym", None).unwrap();
        assert!(matches!(
            workspace.rename_habit(1, ""),
            Err(HabitError::EmptyTitle)
        ));
        assert_eq!(workspace.habit(1).unwrap().title, "Gym");
    }

    #[test]
    fn create_with_unknown_category_fails() {
        let mut workspace = Workspace::default();
        assert!(matches!(
            workspace.create_habit(1, "Gym", Some(9)),
            Err(HabitError::CategoryNotFound(9))
        ));
        assert!(workspace.habits.is_empty());
    }

    #[test]
    fn toggle_marks_then_unmarks() {
        let mut workspace = Workspace::default();
        workspace.create_habit(1, "Gym", None).unwrap();

        assert!(workspace.toggle_day(1, "03010-24", today()).unwrap());
        assert!(workspace.habit(1).unwrap().marked_days.contains("03010-24"));

        assert!(!workspace.toggle_day(1, "03010-24", today()).unwrap());
        assert!(workspace.habit(1).unwrap().marked_days.is_empty());
    }

    #[test]
    fn toggle_rejects_future_and_malformed_keys() {
        let mut workspace = Workspace::default();
        workspace.create_habit(1, "Gym", None).unwrap();

        assert!(matches!(
            workspace.toggle_day(1, "03111-24", today()),
            Err(HabitError::FutureDay(_))
        ));
        assert!(matches!(
            workspace.toggle_day(1, "3-10-24", today()),
            Err(HabitError::DateKey(DateKeyError::Layout { .. }))
        ));
        assert!(matches!(
            workspace.toggle_day(1, "03110-24", today()),
            Err(HabitError::DateKey(DateKeyError::WeekdayMismatch { .. }))
        ));
        assert!(workspace.habit(1).unwrap().marked_days.is_empty());
    }

    #[test]
    fn toggle_unknown_habit_fails() {
        let mut workspace = Workspace::default();
        assert!(matches!(
            workspace.toggle_day(4, "03010-24", today()),
            Err(HabitError::HabitNotFound(4))
        ));
    }

    #[test]
    fn deleting_category_clears_references() {
        let mut workspace = Workspace::default();
        workspace.create_category(10, "Health").unwrap();
        workspace.create_category(11, "Learning").unwrap();
        workspace.create_habit(1, "Gym", Some(10)).unwrap();
        workspace.create_habit(2, "Run", Some(10)).unwrap();
        workspace.create_habit(3, "Read", Some(11)).unwrap();

        let removed = workspace.delete_category(10).unwrap();
        assert_eq!(removed.name, "Health");
        assert_eq!(workspace.habit(1).unwrap().category_id, None);
        assert_eq!(workspace.habit(2).unwrap().category_id, None);
        assert_eq!(workspace.habit(3).unwrap().category_id, Some(11));
        assert!(matches!(
            workspace.delete_category(10),
            Err(HabitError::CategoryNotFound(10))
        ));
    }

    #[test]
    fn assign_and_clear_category() {
        let mut workspace = Workspace::default();
        workspace.create_category(10, "Health").unwrap();
        workspace.create_habit(1, "Gym", None).unwrap();

        assert_eq!(workspace.assign_category(1, Some(10)).unwrap().category_id, Some(10));
        assert_eq!(workspace.assign_category(1, None).unwrap().category_id, None);
        assert!(matches!(
            workspace.assign_category(1, Some(99)),
            Err(HabitError::CategoryNotFound(99))
        ));
    }

    #[test]
    fn rename_category_trims() {
        let mut workspace = Workspace::default();
        workspace.create_category(10, "Health").unwrap();
        assert_eq!(workspace.rename_category(10, " Fitness ").unwrap().name, "Fitness");
        assert!(matches!(
            workspace.rename_category(10, " "),
            Err(HabitError::EmptyCategoryName)
        ));
    }

    #[test]
    fn delete_habit_removes_it() {
        let mut workspace = Workspace::default();
        workspace.create_habit(1, "Gym", None).unwrap();
        assert_eq!(workspace.delete_habit(1).unwrap().title, "Gym");
        assert!(matches!(workspace.delete_habit(1), Err(HabitError::HabitNotFound(1))));
    }
}
