/// Cycles the highlighted role in the hero banner.
#[derive(Debug, Clone)]
pub struct RoleRotation {
    roles: Vec<String>,
    index: usize,
}

impl RoleRotation {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.roles.get(self.index).map(String::as_str)
    }

    /// Move to the next role, wrapping at the end.
    pub fn advance(&mut self) -> Option<&str> {
        if self.roles.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.roles.len();
        self.current()
    }
}
