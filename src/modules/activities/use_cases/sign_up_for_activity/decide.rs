use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::{ActivityEvent, ParticipantSignedUp};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::{
    DecideError, Decision,
};

pub fn decide_sign_up(activity: Option<&Activity>, command: SignUpForActivity) -> Decision {
    let Some(activity) = activity else {
        return Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        };
    };

    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }

    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantSignedUp(ParticipantSignedUp {
            activity_name: command.activity_name,
            email: command.email,
        })],
    }
}
