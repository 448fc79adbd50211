#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}

impl SignUpForActivity {
    pub fn confirmation(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}
