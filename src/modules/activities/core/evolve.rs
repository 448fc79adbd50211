use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp(e) => {
            if !activity.has_participant(&e.email) {
                activity.participants.push(e.email);
            }
        }
        ActivityEvent::ParticipantUnregistered(e) => {
            activity.participants.retain(|p| *p != e.email);
        }
    }
    activity
}
