use crate::config::StudentProfile;
use crate::domain::ports::Activity;
use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct StudentInfo {
    profile: StudentProfile,
}

impl StudentInfo {
    pub fn new(profile: StudentProfile) -> Self {
        Self { profile }
    }

    pub fn render(&self) -> String {
        format!(
            "Name: {}\nSection and Course: {}\nAGE: {}\nGENDER: {}\nCODING DEVICES: {}\n",
            self.profile.name,
            self.profile.section,
            self.profile.age,
            self.profile.gender,
            self.profile.coding_devices
        )
    }
}

impl Activity for StudentInfo {
    fn title(&self) -> &str {
        "Virtual Student Info"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.header(self.title())?;
        console.say(&self.render())?;
        console.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_profile() {
        let text = StudentInfo::new(StudentProfile::default()).render();
        assert!(text.starts_with("Name: Alberto Jr Deniros\n"));
        assert!(text.contains("Section and Course: BSCS 1-A\n"));
        assert!(text.contains("AGE: 23\n"));
        assert!(text.contains("GENDER: MALE\n"));
        assert!(text.ends_with("CODING DEVICES: Desktop Computer\n"));
    }
}
