//! The fixed superhero teams and their rosters.

use octofit::models::{NewTeam, NewUser};

pub const TEAM_MARVEL: &str = "Team Marvel";
pub const TEAM_DC: &str = "Team DC";

/// A seeded user, before it is assigned to a stored team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub name: &'static str,
    pub email: &'static str,
}

const fn hero(name: &'static str, email: &'static str) -> Hero {
    Hero { name, email }
}

/// A team and the heroes who belong to it.
#[derive(Debug, Clone, Copy)]
pub struct Squad {
    pub name: &'static str,
    pub description: &'static str,
    pub heroes: &'static [Hero],
}

impl Squad {
    pub fn team(&self) -> NewTeam {
        NewTeam {
            name: self.name.to_string(),
            description: self.description.to_string(),
        }
    }

    /// Users for this squad's heroes, carrying `team_name` as their team.
    pub fn members(&self, team_name: &str) -> Vec<NewUser> {
        self.heroes
            .iter()
            .map(|hero| NewUser {
                name: hero.name.to_string(),
                email: hero.email.to_string(),
                team: team_name.to_string(),
            })
            .collect()
    }
}

pub const SQUADS: [Squad; 2] = [
    Squad {
        name: TEAM_MARVEL,
        description: "Avengers assemble! The mightiest heroes defending Earth.",
        heroes: &[
            hero("Tony Stark", "ironman@avengers.com"),
            hero("Steve Rogers", "captainamerica@avengers.com"),
            hero("Thor Odinson", "thor@asgard.com"),
            hero("Bruce Banner", "hulk@avengers.com"),
            hero("Natasha Romanoff", "blackwidow@avengers.com"),
            hero("Peter Parker", "spiderman@avengers.com"),
        ],
    },
    Squad {
        name: TEAM_DC,
        description: "Justice League united! Protecting humanity with power and justice.",
        heroes: &[
            hero("Clark Kent", "superman@justiceleague.com"),
            hero("Bruce Wayne", "batman@justiceleague.com"),
            hero("Diana Prince", "wonderwoman@justiceleague.com"),
            hero("Barry Allen", "flash@justiceleague.com"),
            hero("Arthur Curry", "aquaman@justiceleague.com"),
            hero("Hal Jordan", "greenlantern@justiceleague.com"),
        ],
    },
];

/// Total number of seeded users across all squads.
pub fn roster_size() -> usize {
    SQUADS.iter().map(|squad| squad.heroes.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_squads_split_roster_evenly() {
        assert_eq!(roster_size(), 12);
        for squad in &SQUADS {
            assert_eq!(squad.heroes.len(), 6);
        }
    }

    #[test]
    fn test_emails_are_unique() {
        let emails: HashSet<_> = SQUADS
            .iter()
            .flat_map(|squad| squad.heroes.iter().map(|h| h.email))
            .collect();
        assert_eq!(emails.len(), roster_size());
    }

    #[test]
    fn test_members_copy_team_name() {
        let members = SQUADS[1].members("Team DC");
        assert_eq!(members.len(), 6);
        assert!(members.iter().all(|m| m.team == "Team DC"));
        assert_eq!(members[1].name, "Bruce Wayne");
    }
}
