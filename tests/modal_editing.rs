//! Modal Editing Tests
//!
//! Drive a whole session through key scripts and check the document, cursor
//! and viewport after every step. Time is passed explicitly so two-key
//! gestures are deterministic.

use std::time::{Duration, Instant};

use vimlet::core::document::Document;
use vimlet::core::input::InputEvent;
use vimlet::core::input::Key;
use vimlet::core::mode::Mode;
use vimlet::core::session::EditorSession;
use vimlet::core::storage::{FileStorage, MemoryStorage};

fn session(text: &str) -> EditorSession {
    let mut s = EditorSession::new(
        "test.txt",
        Document::from_string(text),
        Box::new(MemoryStorage::new()),
    );
    s.resize(40, 6);
    s
}

/// Feed a key script, every key arriving at `now`
fn feed_at(s: &mut EditorSession, script: &str, now: Instant) {
    for event in InputEvent::parse_script(script).unwrap() {
        s.handle_input_at(&event, now);
    }
}

fn feed(s: &mut EditorSession, script: &str) {
    feed_at(s, script, Instant::now());
}

fn lines(s: &EditorSession) -> Vec<String> {
    s.document.lines_from(0).collect()
}

fn assert_consistent(s: &EditorSession) {
    let doc = &s.document;
    let view = &s.view;
    assert!(doc.line_count() >= 1, "document lost its last line");
    assert!(
        view.cursor_y < doc.line_count(),
        "cursor row {} past {} lines",
        view.cursor_y,
        doc.line_count()
    );
    assert!(
        view.cursor_x <= doc.line_len(view.cursor_y),
        "cursor col {} past line length {}",
        view.cursor_x,
        doc.line_len(view.cursor_y)
    );
    assert!(view.scroll_offset <= view.cursor_y, "cursor above viewport");
    assert!(
        view.cursor_y < view.scroll_offset + view.height,
        "cursor below viewport"
    );
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn three_line_scenario() {
    let storage = MemoryStorage::new();
    storage.insert("f.txt", "ab\ncd\nef");
    let mut s = EditorSession::open("f.txt", Box::new(storage.clone())).unwrap();

    feed(&mut s, "jl");
    assert_eq!((s.view.cursor_y, s.view.cursor_x), (1, 1));

    feed(&mut s, "x");
    assert_eq!(lines(&s), ["ab", "c", "ef"]);

    feed(&mut s, "iZ<Esc>");
    assert_eq!(lines(&s), ["ab", "cZ", "ef"]);
    assert_eq!(s.mode(), Mode::Normal);
    assert!(s.document.modified);

    feed(&mut s, ":wq<Enter>");
    assert!(s.should_quit());
    assert_eq!(storage.contents("f.txt").as_deref(), Some("ab\ncZ\nef"));
    assert!(!s.document.modified);
}

#[test]
fn ctrl_c_quits_without_saving() {
    let storage = MemoryStorage::new();
    storage.insert("f.txt", "keep");
    let mut s = EditorSession::open("f.txt", Box::new(storage.clone())).unwrap();

    feed(&mut s, "x<^C>");
    assert!(s.should_quit());
    assert_eq!(storage.contents("f.txt").as_deref(), Some("keep"));
}

#[test]
fn force_quit_discards_changes() {
    let storage = MemoryStorage::new();
    storage.insert("f.txt", "keep");
    let mut s = EditorSession::open("f.txt", Box::new(storage.clone())).unwrap();

    feed(&mut s, "dd:q!<Enter>");
    assert!(s.should_quit());
    assert_eq!(storage.contents("f.txt").as_deref(), Some("keep"));
}

// =============================================================================
// NAVIGATION BOUNDS
// =============================================================================

/// Small deterministic generator so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn random_keys_keep_cursor_in_bounds() {
    let keys = [
        Key::Char('h'),
        Key::Char('j'),
        Key::Char('k'),
        Key::Char('l'),
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Char('x'),
        Key::Char('d'),
        Key::Char('i'),
        Key::Char('q'),
        Key::Char('\u{e9}'),
        Key::Tab,
        Key::Enter,
        Key::Backspace,
        Key::Esc,
    ];

    let text = (0..30)
        .map(|i| "word ".repeat(i % 7))
        .collect::<Vec<_>>()
        .join("\n");
    let mut s = session(&text);
    let mut rng = Lcg(0x5eed);
    let mut now = Instant::now();

    for _ in 0..5_000 {
        let key = keys[(rng.next() % keys.len() as u64) as usize];
        // Spread keys over time so some `d` pairs expire and some complete
        now += Duration::from_millis(rng.next() % 400);
        s.handle_input_at(&InputEvent::key(key), now);
        assert_consistent(&s);
        assert!(!s.should_quit());
    }
}

#[test]
fn movement_stops_at_edges() {
    let mut s = session("abc\nd");
    feed(&mut s, "hhhkkk");
    assert_eq!((s.view.cursor_y, s.view.cursor_x), (0, 0));

    feed(&mut s, "llllll");
    assert_eq!(s.view.cursor_x, 3);

    // Moving down onto a shorter line clamps the column
    feed(&mut s, "jjj");
    assert_eq!((s.view.cursor_y, s.view.cursor_x), (1, 1));
}

#[test]
fn viewport_follows_cursor() {
    let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut s = session(&text);
    assert_eq!(s.view.height, 5);

    feed(&mut s, &"j".repeat(12));
    assert_eq!(s.view.cursor_y, 12);
    assert_eq!(s.view.scroll_offset, 8);

    feed(&mut s, &"k".repeat(10));
    assert_eq!(s.view.scroll_offset, 2);
    assert_consistent(&s);
}

// =============================================================================
// INSERTION
// =============================================================================

#[test]
fn insert_then_backspace_round_trips() {
    let original = "hello wörld";
    for col in 0..=original.chars().count() {
        let mut s = session(original);
        s.view.goto(&s.document, 0, col);
        feed(&mut s, "iabc<BS><BS><BS><Esc>");
        assert_eq!(lines(&s), [original], "column {col}");
        assert_eq!(s.view.cursor_x, col);
    }
}

#[test]
fn enter_splits_into_prefix_and_suffix() {
    let original = "hello wörld";
    let chars: Vec<char> = original.chars().collect();
    for col in 0..=chars.len() {
        let mut s = session(&format!("above\n{original}\nbelow"));
        s.view.goto(&s.document, 1, col);
        feed(&mut s, "i<Enter>");

        let prefix: String = chars[..col].iter().collect();
        let suffix: String = chars[col..].iter().collect();
        assert_eq!(lines(&s), ["above", prefix.as_str(), suffix.as_str(), "below"]);
        assert_eq!((s.view.cursor_y, s.view.cursor_x), (2, 0));
    }
}

#[test]
fn insert_message_shows_and_clears() {
    let mut s = session("x");
    feed(&mut s, "i");
    assert_eq!(s.message(), Some("-- INSERT --"));
    assert!(s.status_line().contains("INSERT"));
    feed(&mut s, "<Esc>");
    assert_eq!(s.message(), None);
}

// =============================================================================
// LINE DELETION
// =============================================================================

#[test]
fn dd_deletes_exactly_one_line() {
    let mut s = session("one\ntwo\nthree");
    s.view.goto(&s.document, 1, 2);
    feed(&mut s, "dd");
    assert_eq!(lines(&s), ["one", "three"]);
    assert_eq!(s.view.cursor_y, 1);
    assert_consistent(&s);
}

#[test]
fn dd_never_leaves_zero_lines() {
    let mut s = session("one\ntwo\nthree");
    for _ in 0..5 {
        feed(&mut s, "dd");
        assert_consistent(&s);
    }
    assert_eq!(s.document.line_count(), 1);
    assert_eq!(lines(&s), [""]);
    assert_eq!((s.view.cursor_y, s.view.cursor_x), (0, 0));
}

#[test]
fn dd_on_last_line_moves_cursor_up() {
    let mut s = session("one\ntwo");
    feed(&mut s, "jdd");
    assert_eq!(lines(&s), ["one"]);
    assert_eq!(s.view.cursor_y, 0);
}

#[test]
fn d_other_key_d_deletes_nothing() {
    let mut s = session("one\ntwo");
    feed(&mut s, "dld");
    assert_eq!(lines(&s), ["one", "two"]);
    assert!(!s.document.modified);
}

#[test]
fn expired_d_starts_fresh() {
    let mut s = session("one\ntwo\nthree");
    let timeout = s.pending_timeout();
    let t0 = Instant::now();

    feed_at(&mut s, "d", t0);
    feed_at(&mut s, "d", t0 + timeout + Duration::from_millis(1));
    assert_eq!(s.document.line_count(), 3, "late second d must not delete");

    // The late d armed a new gesture
    feed_at(&mut s, "d", t0 + timeout + Duration::from_millis(50));
    assert_eq!(lines(&s), ["two", "three"]);
}

#[test]
fn custom_pending_timeout_is_honoured() {
    let mut s = session("one\ntwo").with_pending_timeout(Duration::from_secs(2));
    let t0 = Instant::now();
    feed_at(&mut s, "d", t0);
    feed_at(&mut s, "d", t0 + Duration::from_millis(1500));
    assert_eq!(lines(&s), ["two"]);
}

// =============================================================================
// COMMANDS
// =============================================================================

#[test]
fn unknown_command_reports_and_changes_nothing() {
    let mut s = session("one\ntwo");
    s.view.goto(&s.document, 1, 1);
    feed(&mut s, ":bogus<Enter>");
    assert_eq!(s.mode(), Mode::Normal);
    assert_eq!(s.message(), Some("unknown command: bogus"));
    assert_eq!(lines(&s), ["one", "two"]);
    assert_eq!((s.view.cursor_y, s.view.cursor_x), (1, 1));
    assert!(!s.should_quit());
}

#[test]
fn escape_abandons_command_line() {
    let mut s = session("one");
    feed(&mut s, ":wq<Esc>");
    assert_eq!(s.mode(), Mode::Normal);
    assert!(!s.should_quit());
}

#[test]
fn write_reports_lines_and_bytes() {
    let storage = MemoryStorage::new();
    storage.insert("f.txt", "ab\ncd");
    let mut s = EditorSession::open("f.txt", Box::new(storage.clone())).unwrap();
    feed(&mut s, ":w<Enter>");
    assert_eq!(s.message(), Some("\"f.txt\" 2L, 5B written"));
    assert!(!s.should_quit());
}

#[test]
fn failed_save_keeps_document() {
    let storage = MemoryStorage::new();
    storage.insert("f.txt", "ab");
    let mut s = EditorSession::open("f.txt", Box::new(storage.clone())).unwrap();
    storage.set_read_only(true);

    feed(&mut s, "x:wq<Enter>");
    assert!(!s.should_quit());
    assert_eq!(s.mode(), Mode::Normal);
    assert!(s.document.modified);
    assert_eq!(lines(&s), ["b"]);
    assert_eq!(storage.contents("f.txt").as_deref(), Some("ab"));
    assert!(s.message().unwrap().starts_with("error saving file:"));
}

// =============================================================================
// FILE ROUND TRIP
// =============================================================================

#[test]
fn load_then_write_is_byte_identical() {
    let samples = [
        "",
        "single line",
        "trailing newline\n",
        "a\n\n\nb\n",
        "tabs\tand ünïcödé 日本\r\ncrlf stays in the line\n",
    ];

    let dir = tempfile::tempdir().unwrap();
    for (i, sample) in samples.iter().enumerate() {
        let path = dir.path().join(format!("sample{i}.txt"));
        std::fs::write(&path, sample).unwrap();

        let mut s = EditorSession::open(&path, Box::new(FileStorage)).unwrap();
        feed(&mut s, ":w<Enter>");
        assert!(s.message().unwrap().ends_with("written"), "sample {i}");

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, sample.as_bytes(), "sample {i}");
    }
}

#[test]
fn edits_reach_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "first\nsecond\nthird\n").unwrap();

    let mut s = EditorSession::open(&path, Box::new(FileStorage)).unwrap();
    feed(&mut s, "jddiNEW <Esc>:wq<Enter>");
    assert!(s.should_quit());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nNEW third\n");
}

#[cfg(unix)]
#[test]
fn write_through_symlink_updates_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    std::fs::write(&target, "old").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let mut s = EditorSession::open(&link, Box::new(FileStorage)).unwrap();
    feed(&mut s, "iNEW<Esc>:w<Enter>");
    assert!(s.message().unwrap().ends_with("written"));

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "NEWold");
    let meta = std::fs::symlink_metadata(&link).unwrap();
    assert!(meta.file_type().is_symlink());
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let result = EditorSession::open(dir.path().join("nope.txt"), Box::new(FileStorage));
    assert!(result.is_err());

    let result = EditorSession::open(dir.path(), Box::new(FileStorage));
    assert!(result.is_err());
}
