/// Capability-based permissions model.
///
/// Kept deliberately abstract: the filesystem adapter decides how a
/// capability maps onto the host platform (mode bits on unix, nothing on
/// Windows). The planner only ever distinguishes "regular file" from
/// "script".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    /// A regular file: readable and writable.
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    /// An executable script: readable, writable, executable.
    pub const fn script() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    pub const fn readable(&self) -> bool {
        self.readable
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    pub const fn executable(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_read_write() {
        let perms = Permissions::default();
        assert!(perms.readable());
        assert!(perms.writable());
        assert!(!perms.executable());
    }

    #[test]
    fn script_is_executable() {
        assert!(Permissions::script().executable());
    }
}
