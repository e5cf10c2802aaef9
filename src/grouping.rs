//! View-state aggregation: bucketing rows by muscle group and measuring how
//! much of a list has been completed.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{ExerciseWithGroup, WorkoutExerciseWithDetails, WorkoutWithGroup};

/// Completed items out of a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Whole-number percentage, rounded half up. Zero for an empty list.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Items that can be ticked off.
pub trait Completable {
    fn is_completed(&self) -> bool;
}

/// Items tagged with the muscle group they belong to.
pub trait MuscleGroupTagged {
    fn muscle_group(&self) -> MuscleGroupRef;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuscleGroupRef {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<T> {
    pub group: MuscleGroupRef,
    pub items: Vec<T>,
}

impl<T: Completable> Group<T> {
    pub fn progress(&self) -> Progress {
        progress_of(&self.items)
    }
}

pub fn progress_of<T: Completable>(items: &[T]) -> Progress {
    let completed = items.iter().filter(|i| i.is_completed()).count();
    Progress::new(completed, items.len())
}

/// Bucket `items` by muscle group. Groups come out in the order their first
/// item appears, and items keep their relative order inside a group.
pub fn group_by_muscle_group<T, I>(items: I) -> Vec<Group<T>>
where
    T: MuscleGroupTagged,
    I: IntoIterator<Item = T>,
{
    let mut groups: Vec<Group<T>> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for item in items {
        let group = item.muscle_group();
        let slot = *index.entry(group.id).or_insert_with(|| {
            groups.push(Group {
                group,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}

impl Completable for WorkoutWithGroup {
    fn is_completed(&self) -> bool {
        self.is_completed
    }
}

impl Completable for WorkoutExerciseWithDetails {
    fn is_completed(&self) -> bool {
        self.is_completed
    }
}

impl MuscleGroupTagged for WorkoutWithGroup {
    fn muscle_group(&self) -> MuscleGroupRef {
        MuscleGroupRef {
            id: self.muscle_group_id,
            name: self.group_name.clone(),
            description: self.group_description.clone(),
        }
    }
}

impl MuscleGroupTagged for ExerciseWithGroup {
    fn muscle_group(&self) -> MuscleGroupRef {
        MuscleGroupRef {
            id: self.muscle_group_id,
            name: self.group_name.clone(),
            description: self.group_description.clone(),
        }
    }
}

impl MuscleGroupTagged for WorkoutExerciseWithDetails {
    fn muscle_group(&self) -> MuscleGroupRef {
        MuscleGroupRef {
            id: self.muscle_group_id,
            name: self.group_name.clone(),
            description: None,
        }
    }
}
