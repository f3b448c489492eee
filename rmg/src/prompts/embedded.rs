//! Embedded fallback prompts
//!
//! Compiled into the binary and used when no template override is configured.

/// Instruction sent to the model for a learning roadmap
pub const ROADMAP: &str = r#"
You are an expert learning mentor.

Create a detailed learning roadmap for:
Domain: {{domain}}
Skill Level: {{level}}
Time Duration: {{duration}}

The roadmap should include:
- Weekly or phase-wise breakdown
- Topics to learn
- Tools and technologies
- Practice tasks or mini projects
- Learning tips

Use simple English and bullet points.
"#;
