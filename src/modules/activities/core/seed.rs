use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::SeedError;

const SCHOOL_DOMAIN: &str = "mergington.edu";

fn students(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{name}@{SCHOOL_DOMAIN}"))
        .collect()
}

/// The activities every fresh store starts with.
pub fn seed_activities() -> Result<Vec<Activity>, SeedError> {
    Ok(vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            students(&["michael", "daniel"]),
        )?,
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            students(&["emma", "sophia"]),
        )?,
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            students(&["john", "olivia"]),
        )?,
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            students(&["liam", "noah"]),
        )?,
        Activity::new(
            "Basketball Club",
            "Practice basketball skills and play friendly games",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
            students(&["ava", "mia"]),
        )?,
        Activity::new(
            "Art Club",
            "Explore painting, drawing, and other visual arts",
            "Mondays, 3:30 PM - 5:00 PM",
            15,
            students(&["amelia", "harper"]),
        )?,
        Activity::new(
            "Drama Society",
            "Act, direct, and produce school plays and performances",
            "Thursdays, 3:30 PM - 5:30 PM",
            20,
            students(&["ella", "scarlett"]),
        )?,
        Activity::new(
            "Math Olympiad",
            "Prepare for math competitions and solve challenging problems",
            "Fridays, 2:00 PM - 3:30 PM",
            10,
            students(&["james", "benjamin"]),
        )?,
        Activity::new(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Wednesdays, 3:30 PM - 5:00 PM",
            12,
            students(&["charlotte", "henry"]),
        )?,
    ])
}
