use crate::modules::activities::core::activity::Activity;

pub fn make_chess_club() -> Activity {
    Activity::new(
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    )
}
