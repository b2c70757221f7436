use rattendance::core::AttendanceStore;
use rattendance::core::cue::RecordingCue;
use rattendance::db::kv::MemoryKv;
use rattendance::errors::AppError;
use rattendance::models::{CAPACITY, DashboardCounts, Roster, SeatStatus};

fn store() -> AttendanceStore<MemoryKv> {
    AttendanceStore::open(MemoryKv::new())
}

fn names_of(store: &AttendanceStore<MemoryKv>) -> Vec<String> {
    store.snapshot().names()
}

#[test]
fn test_default_board_is_empty() {
    let store = store();
    let roster = store.snapshot();

    assert_eq!(roster.seats().len(), CAPACITY);
    assert!(
        roster
            .seats()
            .iter()
            .all(|s| !s.is_occupied() && s.status == SeatStatus::None)
    );
    assert_eq!(store.dashboard_counts(), DashboardCounts::default());
}

#[test]
fn test_set_names_drops_long_and_empty_entries() {
    let mut store = store();
    store.set_names("철수, 영희, 동근이름다섯글자");

    let roster = store.snapshot();
    assert_eq!(roster.get(0).unwrap().name, "철수");
    assert_eq!(roster.get(1).unwrap().name, "영희");
    for i in 2..CAPACITY {
        let seat = roster.get(i).unwrap();
        assert!(!seat.is_occupied(), "seat {} should be empty", i);
        assert_eq!(seat.status, SeatStatus::None);
    }
}

#[test]
fn test_set_names_trims_and_skips_blank_pieces() {
    let mut store = store();
    store.set_names("  가 ,, ,나,   다라마바  ,다라마바사");

    let names = names_of(&store);
    assert_eq!(&names[..3], ["가", "나", "다라마바"]);
    assert_eq!(store.dashboard_counts().total, 3);
}

#[test]
fn test_set_names_caps_at_capacity() {
    let mut store = store();
    let input = (1..=40).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
    store.set_names(&input);

    assert_eq!(store.dashboard_counts().total, CAPACITY);
    assert_eq!(store.snapshot().get(CAPACITY - 1).unwrap().name, "30");
}

#[test]
fn test_blank_input_clears_everything() {
    for blank in ["", "   ", "\t\n"] {
        let mut store = store();
        store.set_names("가, 나");
        store.cycle_status(0).unwrap();

        store.set_names(blank);

        assert_eq!(store.dashboard_counts().total, 0);
        assert!(
            store
                .snapshot()
                .seats()
                .iter()
                .all(|s| s.name.is_empty() && s.status == SeatStatus::None)
        );
    }
}

#[test]
fn test_only_invalid_names_leave_board_empty() {
    let mut store = store();
    store.set_names("가");
    store.set_names("다섯글자이름, ,");

    assert_eq!(store.dashboard_counts().total, 0);
}

#[test]
fn test_cycle_on_empty_seat_is_noop() {
    let mut store = store();
    store.set_names("가");

    for index in 1..CAPACITY {
        let before = store.snapshot().clone();
        let result = store.cycle_status(index).unwrap();
        assert!(result.is_none());
        assert_eq!(&before, store.snapshot());
    }
}

#[test]
fn test_cycle_order_returns_to_none_after_five_steps() {
    let mut store = store();
    store.set_names("가");

    let expected = [
        SeatStatus::Present,
        SeatStatus::Late,
        SeatStatus::Excused,
        SeatStatus::Absent,
        SeatStatus::None,
    ];

    let mut previous = SeatStatus::None;
    for want in expected {
        let t = store.cycle_status(0).unwrap().expect("seat is occupied");
        assert_eq!(t.from, previous);
        assert_eq!(t.to, want);
        assert_eq!(store.snapshot().get(0).unwrap().status, want);
        previous = want;
    }
}

#[test]
fn test_cycle_out_of_range_is_rejected() {
    let mut store = store();
    store.set_names("가");
    let before = store.snapshot().clone();

    let err = store.cycle_status(CAPACITY).unwrap_err();
    assert!(matches!(err, AppError::InvalidSeat(i) if i == CAPACITY));
    assert_eq!(&before, store.snapshot());
}

#[test]
fn test_cycle_notifies_cue_sink() {
    let mut store = AttendanceStore::with_cue(MemoryKv::new(), RecordingCue::default());
    store.set_names("철수, 영희");

    store.cycle_status(1).unwrap();
    store.cycle_status(5).unwrap();

    let seen = &store.cue().seen;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].index, 1);
    assert_eq!(seen[0].name, "영희");
    assert_eq!(seen[0].to, SeatStatus::Present);
}

#[test]
fn test_reset_all_statuses_keeps_names() {
    let mut store = store();
    store.set_names("가, 나, 다");
    store.cycle_status(0).unwrap();
    store.cycle_status(2).unwrap();
    store.cycle_status(2).unwrap();

    store.reset_all_statuses();

    assert_eq!(&names_of(&store)[..3], ["가", "나", "다"]);
    assert!(
        store
            .snapshot()
            .seats()
            .iter()
            .all(|s| s.status == SeatStatus::None)
    );
}

#[test]
fn test_sort_by_name_keeps_status_with_name() {
    let mut store = store();
    store.set_names("다, 가, 나");
    store.cycle_status(0).unwrap(); // 다 → present
    store.cycle_status(2).unwrap(); // 나 → present
    store.cycle_status(2).unwrap(); // 나 → late

    store.sort_by_name();

    let roster = store.snapshot();
    let seat = |i: usize| roster.get(i).unwrap();
    assert_eq!(seat(0).name, "가");
    assert_eq!(seat(0).status, SeatStatus::None);
    assert_eq!(seat(1).name, "나");
    assert_eq!(seat(1).status, SeatStatus::Late);
    assert_eq!(seat(2).name, "다");
    assert_eq!(seat(2).status, SeatStatus::Present);
    for i in 3..CAPACITY {
        assert!(!seat(i).is_occupied());
        assert_eq!(seat(i).status, SeatStatus::None);
    }
}

#[test]
fn test_sort_compacts_gaps() {
    let kv = MemoryKv::new()
        .with_entry("busAttendees", r#"["", "나", "", "가", ""]"#)
        .with_entry("busAttendeeStates", r#"{"1": 1, "3": "x"}"#);
    let mut store = AttendanceStore::open(kv);

    store.sort_by_name();

    let roster = store.snapshot();
    assert_eq!(roster.get(0).unwrap().name, "가");
    assert_eq!(roster.get(0).unwrap().status, SeatStatus::Absent);
    assert_eq!(roster.get(1).unwrap().name, "나");
    assert_eq!(roster.get(1).unwrap().status, SeatStatus::Present);
    assert_eq!(store.dashboard_counts().total, 2);
}

#[test]
fn test_dashboard_counts_present_only() {
    let mut store = store();
    store.set_names("가, 나, 다, 라, 마");
    store.cycle_status(0).unwrap();
    store.cycle_status(3).unwrap();

    assert_eq!(
        store.dashboard_counts(),
        DashboardCounts {
            total: 5,
            present: 2
        }
    );

    // late does not count as present
    store.cycle_status(3).unwrap();
    assert_eq!(store.dashboard_counts().present, 1);
}

#[test]
fn test_same_index_rename_keeps_status() {
    let mut store = store();
    store.set_names("가, 나");
    store.cycle_status(1).unwrap();

    store.set_names("가, 바");

    let seat = store.snapshot().get(1).unwrap();
    assert_eq!(seat.name, "바");
    assert_eq!(seat.status, SeatStatus::Present);
}

#[test]
fn test_shrinking_roster_resets_dropped_seats() {
    let mut store = store();
    store.set_names("가, 나, 다");
    store.cycle_status(2).unwrap();

    store.set_names("가, 나");
    assert_eq!(store.snapshot().get(2).unwrap().status, SeatStatus::None);

    // growing again starts the seat fresh
    store.set_names("가, 나, 다");
    assert_eq!(store.snapshot().get(2).unwrap().status, SeatStatus::None);
}

#[test]
fn test_names_line_feeds_back_into_set_names() {
    let mut store = store();
    store.set_names("철수,영희 , 민수");
    let line = store.names_line();
    assert_eq!(line, "철수, 영희, 민수");

    let before = store.snapshot().clone();
    store.set_names(&line);
    assert_eq!(&before, store.snapshot());
}

#[test]
fn test_failing_store_keeps_in_memory_state() {
    let mut store = AttendanceStore::open(MemoryKv::read_only());

    store.set_names("가, 나");
    assert!(!store.last_save_ok());
    store.cycle_status(0).unwrap();
    store.sort_by_name();
    store.reset_all_statuses();
    store.cycle_status(1).unwrap();

    assert_eq!(store.dashboard_counts(), DashboardCounts { total: 2, present: 1 });
    assert!(!store.last_save_ok());
}

#[test]
fn test_sort_puts_hangul_before_latin() {
    let mut store = store();
    store.set_names("amy, 가, 1");

    store.sort_by_name();

    assert_eq!(store.names_line(), "1, 가, amy");
}

#[test]
fn test_roster_is_always_capacity_seats() {
    assert_eq!(Roster::empty().seats().len(), CAPACITY);

    let names: Vec<String> = (0..CAPACITY + 5).map(|i| format!("n{}", i)).collect();
    let roster = Roster::from_parts(&names[..3], &[SeatStatus::Present]);
    assert_eq!(roster.seats().len(), CAPACITY);
    assert_eq!(roster.get(0).unwrap().status, SeatStatus::Present);
    assert!(roster.get(CAPACITY).is_none());

    let roster = Roster::from_parts(&names, &[]);
    assert_eq!(roster.seats().len(), CAPACITY);
    assert_eq!(roster.get(CAPACITY - 1).unwrap().name, format!("n{}", CAPACITY - 1));
}
