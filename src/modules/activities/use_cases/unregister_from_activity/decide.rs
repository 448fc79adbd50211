use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::{ActivityEvent, ParticipantUnregistered};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decision::{
    DecideError, Decision,
};

pub fn decide_unregister(activity: Option<&Activity>, command: UnregisterFromActivity) -> Decision {
    let Some(activity) = activity else {
        return Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        };
    };

    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }

    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantUnregistered(
            ParticipantUnregistered {
                activity_name: command.activity_name,
                email: command.email,
            },
        )],
    }
}
