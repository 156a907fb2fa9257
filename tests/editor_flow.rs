use std::time::Duration;

use promptwizard::commands::{EditorCommand, Outcome};
use promptwizard::tests::util::FailingClipboard;
use promptwizard::{Labels, MemoryClipboard, Session, SessionState};

async fn run_lines(
    session: &mut Session,
    clipboard: &mut MemoryClipboard,
    lines: &[&str],
) -> Vec<Outcome> {
    let labels = Labels::default();
    let mut outcomes = Vec::new();
    for line in lines {
        let command = EditorCommand::parse(line).unwrap();
        outcomes.push(command.dispatch(session, &labels, clipboard).await.unwrap());
    }
    outcomes
}

fn write_payload(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path.display().to_string()
}

#[tokio::test(start_paused = true)]
async fn load_edit_and_copy_structured() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_payload(
        &dir,
        "astronaut.json",
        r#"{"subject":"a lone astronaut","mood":"melancholic","negativePrompt":"blurry"}"#,
    );

    let mut session = Session::new();
    let mut clipboard = MemoryClipboard::new();
    let load = format!("load {path}");
    let outcomes = run_lines(
        &mut session,
        &mut clipboard,
        &[
            load.as_str(),
            "target stable diffusion",
            "set lighting rim light",
            "copy",
        ],
    )
    .await;

    assert!(matches!(&outcomes[0], Outcome::Print(text) if text.contains("Subject (subject): a lone astronaut")));
    assert_eq!(outcomes[1], Outcome::Print("Target set to Stable Diffusion.".into()));
    assert_eq!(outcomes[2], Outcome::Print("Updated lighting.".into()));
    assert_eq!(outcomes[3], Outcome::Print("✅ Copied!".into()));
    assert_eq!(
        clipboard.last(),
        Some("a lone astronaut, melancholic, rim light\nNegative prompt: blurry")
    );
    assert!(session.is_copied());

    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert!(!session.is_copied());
}

#[tokio::test]
async fn compact_payload_uses_text_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_payload(&dir, "compact.json", r#""misty bamboo forest --v 6""#);

    let mut session = Session::new();
    let mut clipboard = MemoryClipboard::new();
    let load = format!("load {path} professional");
    let outcomes = run_lines(
        &mut session,
        &mut clipboard,
        &[
            load.as_str(),
            "set subject panda",
            "text misty bamboo forest, panda --v 6",
            "target dalle",
            "copy",
        ],
    )
    .await;

    assert!(matches!(&outcomes[0], Outcome::Print(text) if text.contains("[Professional Prompt]")));
    assert_eq!(
        outcomes[1],
        Outcome::Print("the active prompt is compact; it has no fields".into())
    );
    assert_eq!(clipboard.last(), Some("misty bamboo forest, panda --v 6"));
}

#[tokio::test]
async fn failed_load_shows_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_payload(&dir, "broken.json", "[1, 2, 3]");

    let mut session = Session::new();
    let mut clipboard = MemoryClipboard::new();
    let load = format!("load {path} detailed");
    let outcomes = run_lines(&mut session, &mut clipboard, &[load.as_str(), "copy"]).await;

    let SessionState::Failed(message) = session.state() else {
        panic!("expected failed state");
    };
    assert!(message.starts_with("An error occurred: failed to decode payload"));
    assert!(matches!(&outcomes[0], Outcome::Print(text) if text.contains("! An error occurred")));
    assert_eq!(outcomes[1], Outcome::Silent);
    assert!(clipboard.history().is_empty());
}

#[tokio::test]
async fn copy_with_failing_clipboard_is_silent() {
    let mut session = Session::new();
    session.adopt(promptwizard::tests::util::sample_structure().into());
    let outcome = EditorCommand::Copy
        .dispatch(&mut session, &Labels::default(), &mut FailingClipboard)
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Silent);
    assert!(!session.is_copied());
}

#[tokio::test]
async fn status_and_quit() {
    let mut session = Session::new();
    session.adopt(promptwizard::tests::util::sample_structure().into());
    let mut clipboard = MemoryClipboard::new();
    let outcomes = run_lines(&mut session, &mut clipboard, &["status", "", "quit"]).await;
    assert_eq!(
        outcomes[0],
        Outcome::Print(
            "Target AI Model: Midjourney\nCopied: -\n---\n\
             a lone astronaut, melancholic --ar 16:9 --no blurry"
                .into()
        )
    );
    assert_eq!(outcomes[1], Outcome::Silent);
    assert_eq!(outcomes[2], Outcome::Quit);
}
