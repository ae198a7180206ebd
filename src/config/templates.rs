// file: src/config/templates.rs
// version: 1.0.0
// guid: d1f05b27-9e84-4c16-a3d9-2b47e6a8f091

//! Workspace file templates
//!
//! The content of every file the agent writes is fixed at compile time. The
//! chapter map in particular is load-bearing: the review app reads it with a
//! strict column set, so the header line must match exactly.

/// Header row of `config/chapter_map.csv`
pub const CHAPTER_MAP_HEADER: &str = "Subject,PDF_File,Chapter,Start_Page,End_Page";

/// Commented example row left in the otherwise empty chapter map
pub const CHAPTER_MAP_EXAMPLE: &str = "# Example: Physics,hc_verma_vol1.pdf,Kinematics,45,62";

/// Credential template written by the bootstrap
pub const ENV_BOOTSTRAP: &str = "\
# Credentials for the question bank pipeline. Fill in before running.
GEMINI_API_KEY=
GOOGLE_CLOUD_PROJECT=
";

/// Credential template written by the restructuring pass
///
/// The consolidated pipeline rotates through up to four Gemini keys to stay
/// under the per-key rate limit. Unused slots stay empty.
pub const ENV_ROTATED: &str = "\
# Gemini API keys for the rotating key pool. Leave unused slots empty.
GEMINI_API_KEY_1=
GEMINI_API_KEY_2=
GEMINI_API_KEY_3=
GEMINI_API_KEY_4=
";

/// Git ignore rules for a pipeline workspace
pub const GITIGNORE: &str = "\
venv/
.env
__pycache__/
*.pyc
data/question_bank.db
output/
process.log
process.pid
";

/// Python dependencies of the pipeline and review app
pub const REQUIREMENTS: &str = "\
flask
pandas
pdfplumber
PyPDF2
google-generativeai
python-dotenv
sentence-transformers
reportlab
";

/// Guidance printed after a successful bootstrap
pub const NEXT_STEPS_BOOTSTRAP: &str = "\
Next steps:
  1. Activate the virtual environment: source venv/bin/activate
  2. Fill in your API credentials in .env
  3. Drop your source PDFs into data/raw_jee_materials/
  4. Replace the contents of scripts/run_pipeline.py with the pipeline code
  5. Copy the new HTML and Python code into templates/ and app.py
";

/// Guidance printed after a successful restructuring
pub const NEXT_STEPS_RESTRUCTURE: &str = "\
Next steps:
  1. Fill in config/chapter_map.csv, one row per chapter
  2. Add your Gemini API keys to .env (GEMINI_API_KEY_1 through 4)
  3. Replace the contents of scripts/run_pipeline.py with the consolidated pipeline code
  4. Copy the new HTML and Python code into templates/ and app.py
  5. Start the review app: venv/bin/python app.py
";

/// Render the chapter map template
pub fn chapter_map_csv() -> String {
    format!("{}\n{}\n", CHAPTER_MAP_HEADER, CHAPTER_MAP_EXAMPLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_map_has_exactly_two_lines() {
        let content = chapter_map_csv();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CHAPTER_MAP_HEADER);
        assert!(lines[1].starts_with('#'));
    }

    #[test]
    fn test_chapter_map_header_columns() {
        let columns: Vec<&str> = CHAPTER_MAP_HEADER.split(',').collect();
        assert_eq!(
            columns,
            vec!["Subject", "PDF_File", "Chapter", "Start_Page", "End_Page"]
        );
    }

    #[test]
    fn test_env_templates_leave_keys_unset() {
        for line in ENV_BOOTSTRAP.lines().chain(ENV_ROTATED.lines()) {
            if let Some((_, value)) = line.split_once('=') {
                assert!(value.is_empty(), "template must not ship a value: {}", line);
            }
        }
    }

    #[test]
    fn test_rotated_env_has_four_key_slots() {
        let keys = ENV_ROTATED
            .lines()
            .filter(|l| l.starts_with("GEMINI_API_KEY_"))
            .count();
        assert_eq!(keys, 4);
    }

    #[test]
    fn test_gitignore_covers_runtime_artifacts() {
        assert!(GITIGNORE.contains("venv/"));
        assert!(GITIGNORE.contains(".env"));
        assert!(GITIGNORE.contains("data/question_bank.db"));
    }
}
