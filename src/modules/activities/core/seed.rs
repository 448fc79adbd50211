use crate::modules::activities::core::activity::{Activities, Activity};

/// The registry every process starts from. Restarting the service resets to this table.
pub fn seed_activities() -> Activities {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball training and inter-school games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
                ["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis skills and play in friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
                ["lily@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and sculpture",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                18,
                ["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act in and produce school theater performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
                ["mia@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
                ["noah@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Hands-on experiments and science fair projects",
                "Tuesdays, 3:30 PM - 5:00 PM",
                20,
                ["ethan@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
