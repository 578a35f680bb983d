use super::clock::{Clock, ManualClock};
use super::elapsed::{format_elapsed, whole_seconds_between};
use super::ids::{FolderId, IdParseError, ListId, SpaceId, TaskId};
use super::model::*;
use super::names::{NameError, validate_name};

#[test]
fn ids_parse_and_display() {
    assert_eq!("42".parse::<SpaceId>(), Ok(SpaceId::new(42)));
    assert_eq!(" 7 ".parse::<TaskId>(), Ok(TaskId::new(7)));
    assert_eq!("".parse::<FolderId>(), Err(IdParseError::Empty));
    assert_eq!("abc".parse::<ListId>(), Err(IdParseError::NotAnInteger));
    assert_eq!(ListId::new(9).to_string(), "9");
}

#[test]
fn blank_names_are_rejected() {
    assert_eq!(validate_name(""), Err(NameError::Blank));
    assert_eq!(validate_name(" \t\n"), Err(NameError::Blank));
    assert!(validate_name(" Work ").is_ok());
}

#[test]
fn container_ref_round_trips_columns() {
    let space_id = SpaceId::new(1);
    let folder_id = FolderId::new(2);

    let direct = ContainerRef::from_columns(space_id, None);
    assert_eq!(direct, ContainerRef::SpaceDirect { space_id });
    assert_eq!(direct.folder_id(), None);
    assert_eq!(direct.target(), ListTarget::Space(space_id));

    let nested = ContainerRef::from_columns(space_id, Some(folder_id));
    assert_eq!(nested.space_id(), space_id);
    assert_eq!(nested.folder_id(), Some(folder_id));
    assert_eq!(nested.target(), ListTarget::Folder(folder_id));
}

#[test]
fn elapsed_is_floored_and_never_negative() {
    assert_eq!(whole_seconds_between(1_000, 6_999), 5);
    assert_eq!(whole_seconds_between(10_000, 9_000), 0);
    assert_eq!(whole_seconds_between(i64::MIN, i64::MAX), i64::MAX / 1000);
}

#[test]
fn elapsed_formatting() {
    assert_eq!(format_elapsed(0), "0:00:00");
    assert_eq!(format_elapsed(65), "0:01:05");
    assert_eq!(format_elapsed(3 * 3600 + 2 * 60 + 1), "3:02:01");
    assert_eq!(format_elapsed(-5), "0:00:00");
}

#[test]
fn task_elapsed_includes_running_interval() {
    let mut task = Task {
        id: TaskId::new(1),
        list_id: ListId::new(1),
        title: "Fix bug".to_string(),
        done: false,
        accumulated_seconds: 10,
        running_since_ms: None,
    };
    assert_eq!(task.timer_state(), TimerState::Idle);
    assert_eq!(task.elapsed_seconds_at(1_000_000), 10);

    task.running_since_ms = Some(100_000);
    assert!(task.is_running());
    assert_eq!(task.elapsed_seconds_at(103_500), 13);
    assert_eq!(task.elapsed_seconds_at(50_000), 10);
}

#[test]
fn direction_parse() {
    assert_eq!(Direction::parse("UP"), Some(Direction::Up));
    assert_eq!(Direction::parse(" down "), Some(Direction::Down));
    assert_eq!(Direction::parse("left"), None);
    assert_eq!(Direction::Down.as_str(), "down");
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(5_000);
    let handle = clock.clone();
    handle.advance_secs(3);
    assert_eq!(clock.now_ms(), 8_000);
    clock.set_ms(0);
    assert_eq!(handle.now_ms(), 0);
}
