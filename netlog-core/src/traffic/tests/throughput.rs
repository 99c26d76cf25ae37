use crate::traffic::{ByteWindow, DEVICE_WINDOW, GlobalSpeedWindow, SAMPLE_RING_LEN};
use std::time::{Duration, Instant};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn first_packet_only_opens_window() {
    let mut window = ByteWindow::new(DEVICE_WINDOW);
    let t0 = Instant::now();

    assert_eq!(window.record(300, t0), None);
    assert_eq!(window.accumulated(), 300);
    assert_eq!(window.start(), Some(t0));
}

#[test]
fn window_stays_open_until_its_length_elapses() {
    let mut window = ByteWindow::new(DEVICE_WINDOW);
    let t0 = Instant::now();
    window.record(100, t0);

    assert_eq!(window.record(100, t0 + Duration::from_millis(999)), None);
    assert_eq!(window.accumulated(), 200);
}

#[test]
fn elapsed_time_keeps_sub_second_precision() {
    let mut window = ByteWindow::new(DEVICE_WINDOW);
    let t0 = Instant::now();
    window.record(0, t0);

    let speed = window.record(300, t0 + Duration::from_millis(1500));

    assert_eq!(speed, Some(200.0));
    assert_eq!(window.accumulated(), 0);
    assert_eq!(window.start(), Some(t0 + Duration::from_millis(1500)));
}

#[test]
fn global_speed_starts_at_zero() {
    let window = GlobalSpeedWindow::new();

    assert_eq!(window.speed(), 0.0);
    assert_eq!(window.samples(), &[0.0; SAMPLE_RING_LEN]);
}

#[test]
fn single_window_is_averaged_with_empty_slots() {
    // Arrange: 300 bytes over exactly one 3 s window
    let mut window = GlobalSpeedWindow::new();
    let t0 = Instant::now();

    // Act
    window.record(100, t0);
    window.record(100, t0 + secs(1));
    let sample = window.record(100, t0 + secs(3));

    // Assert: (100 + 0 * 7) / 8
    assert_eq!(sample, Some(100.0));
    assert_eq!(window.speed(), 12.5);
    assert_eq!(window.write_index(), 1);
}

#[test]
fn global_window_ignores_packets_inside_window() {
    let mut window = GlobalSpeedWindow::new();
    let t0 = Instant::now();
    window.record(100, t0);

    assert_eq!(window.record(100, t0 + Duration::from_millis(2999)), None);
    assert_eq!(window.speed(), 0.0);
    assert_eq!(window.accumulated(), 200);
}

#[test]
fn ring_overwrites_oldest_sample() {
    // Arrange: one packet of 300 bytes every 3 s
    let mut window = GlobalSpeedWindow::new();
    let t0 = Instant::now();
    window.record(300, t0);

    // First closed window holds the opening packet too: 600 B / 3 s.
    // Every later window holds a single packet: 300 B / 3 s.
    for k in 1..=8 {
        window.record(300, t0 + secs(3 * k));
    }
    assert_eq!(window.samples()[0], 200.0);
    assert_eq!(window.speed(), 112.5);
    assert_eq!(window.write_index(), 0);

    // Act: ninth sample wraps around onto slot 0
    window.record(300, t0 + secs(27));

    // Assert
    assert_eq!(window.samples(), &[100.0; SAMPLE_RING_LEN]);
    assert_eq!(window.speed(), 100.0);
    assert_eq!(window.write_index(), 1);
}
