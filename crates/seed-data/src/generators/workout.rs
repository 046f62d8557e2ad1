//! The superhero workout catalog.

use octofit::models::{Difficulty, NewWorkout};

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    activity_type: &'static str,
    difficulty: Difficulty,
    estimated_duration: i32,
    estimated_calories: i32,
}

const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        name: "Super Soldier Training",
        description: "High-intensity workout inspired by Captain America",
        activity_type: "Weightlifting",
        difficulty: Difficulty::Hard,
        estimated_duration: 60,
        estimated_calories: 500,
    },
    CatalogEntry {
        name: "Spider Agility Drills",
        description: "Quick reflexes and agility training like Spider-Man",
        activity_type: "Running",
        difficulty: Difficulty::Medium,
        estimated_duration: 45,
        estimated_calories: 400,
    },
    CatalogEntry {
        name: "Asgardian Strength",
        description: "Build godlike strength with Thor-inspired exercises",
        activity_type: "Weightlifting",
        difficulty: Difficulty::Hard,
        estimated_duration: 90,
        estimated_calories: 700,
    },
    CatalogEntry {
        name: "Flash Speed Run",
        description: "Sprint training to channel your inner speedster",
        activity_type: "Running",
        difficulty: Difficulty::Hard,
        estimated_duration: 30,
        estimated_calories: 350,
    },
    CatalogEntry {
        name: "Atlantean Swimming",
        description: "Aquatic workout for underwater endurance",
        activity_type: "Swimming",
        difficulty: Difficulty::Medium,
        estimated_duration: 60,
        estimated_calories: 450,
    },
    CatalogEntry {
        name: "Bat Combat Training",
        description: "Martial arts and combat skills training",
        activity_type: "Boxing",
        difficulty: Difficulty::Hard,
        estimated_duration: 75,
        estimated_calories: 600,
    },
    CatalogEntry {
        name: "Amazon Warrior Yoga",
        description: "Balance and flexibility with warrior poses",
        activity_type: "Yoga",
        difficulty: Difficulty::Easy,
        estimated_duration: 45,
        estimated_calories: 200,
    },
    CatalogEntry {
        name: "Iron Man Endurance",
        description: "Build stamina for long battles",
        activity_type: "Cycling",
        difficulty: Difficulty::Medium,
        estimated_duration: 60,
        estimated_calories: 500,
    },
];

/// The eight suggested workouts, in catalog order.
pub fn workout_catalog() -> Vec<NewWorkout> {
    CATALOG
        .iter()
        .map(|entry| NewWorkout {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            activity_type: entry.activity_type.to_string(),
            difficulty: entry.difficulty,
            estimated_duration: entry.estimated_duration,
            estimated_calories: entry.estimated_calories,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ACTIVITY_TYPES;

    #[test]
    fn test_catalog_has_eight_workouts() {
        let catalog = workout_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "Super Soldier Training");
        assert_eq!(catalog[7].name, "Iron Man Endurance");
    }

    #[test]
    fn test_catalog_uses_known_activity_types() {
        for workout in workout_catalog() {
            assert!(ACTIVITY_TYPES.contains(&workout.activity_type.as_str()));
        }
    }

    #[test]
    fn test_only_yoga_is_easy() {
        let easy: Vec<_> = workout_catalog()
            .into_iter()
            .filter(|w| w.difficulty == Difficulty::Easy)
            .collect();
        assert_eq!(easy.len(), 1);
        assert_eq!(easy[0].name, "Amazon Warrior Yoga");
        assert_eq!(easy[0].estimated_calories, 200);
    }
}
