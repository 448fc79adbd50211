use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Chess Club".to_string(),
                email: "newstudent@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}
