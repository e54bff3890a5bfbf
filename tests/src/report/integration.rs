#![cfg(test)]
use kos_common::error::RoomError;
use kos_core::{Room, RoomRegistry};

fn report_text(registry: &RoomRegistry, days: i64) -> String {
    let mut buf: Vec<u8> = Vec::new();
    registry.write_report(days, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).unwrap()
}

fn rooms_text(registry: &RoomRegistry) -> String {
    let mut buf: Vec<u8> = Vec::new();
    registry.write_rooms(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).unwrap()
}

/// The default run: one room, listing, then a four day report.
#[test]
fn single_room_four_days() {
    let mut registry = RoomRegistry::new();
    registry.add_room("Kamar A", 50000.0).unwrap();

    assert_eq!(registry.calculate_total_rent(4), 200000.0);

    assert_eq!(
        rooms_text(&registry),
        "Daftar Kamar:\n\
         Kamar: Kamar A, Harga per Hari: Rp50000.00\n"
    );

    let report = report_text(&registry, 4);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "----- Laporan Sewa Kamar Kos -----",
            "Kamar: Kamar A, Biaya Sewa: Rp200000.00",
            "Total Biaya Sewa untuk 4 hari: Rp200000.00",
            "------------------------------------",
        ]
    );
}

#[test]
fn empty_registry_report() {
    let registry = RoomRegistry::new();

    assert_eq!(registry.calculate_total_rent(10), 0.0);

    let report = report_text(&registry, 10);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "----- Laporan Sewa Kamar Kos -----",
            "Total Biaya Sewa untuk 10 hari: Rp0.00",
            "------------------------------------",
        ]
    );
}

#[test]
fn negative_price_is_rejected() {
    let result = Room::new("X", -1.0);
    assert!(
        matches!(result, Err(RoomError::InvalidArgument(_))),
        "Negative price should fail: {:?}",
        result
    );

    let mut registry = RoomRegistry::new();
    assert!(registry.add_room("X", -1.0).is_err());
    assert!(registry.is_empty());
}

#[test]
fn listing_has_one_line_per_room_in_insertion_order() {
    let names = ["Kamar 3", "Kamar 1", "Kamar 2", "Kamar 1"];
    let mut registry = RoomRegistry::new();
    for (i, name) in names.iter().enumerate() {
        registry.add_room(*name, 10000.0 * (i + 1) as f64).unwrap();
    }

    let listing = rooms_text(&registry);
    let lines: Vec<&str> = listing.lines().skip(1).collect();

    assert_eq!(
        lines.len(),
        names.len(),
        "Listing should contain one line per room"
    );
    for (line, name) in lines.iter().zip(names) {
        assert!(
            line.starts_with(&format!("Kamar: {name}, ")),
            "Unexpected listing line: {line}"
        );
    }
}

#[test]
fn report_total_matches_room_lines() {
    let mut registry = RoomRegistry::new();
    registry.add_room("Kamar A", 50000.0).unwrap();
    registry.add_room("Kamar B", 45000.0).unwrap();
    registry.add_room("Kamar C", 37500.0).unwrap();

    let days = 30;
    let expected: f64 = registry
        .rooms()
        .iter()
        .map(|room| room.calculate_rent(days))
        .sum();
    assert_eq!(registry.calculate_total_rent(days), expected);

    let report = report_text(&registry, days);
    assert!(report.contains("Kamar: Kamar B, Biaya Sewa: Rp1350000.00"));
    assert!(report.contains("Total Biaya Sewa untuk 30 hari: Rp3975000.00"));
}

#[test]
fn price_update_is_reflected_in_rent() {
    let mut room = Room::new("Kamar A", 50000.0).unwrap();
    room.set_price_per_day(60000.0).unwrap();
    assert_eq!(room.calculate_rent(4), 240000.0);

    assert!(room.set_price_per_day(-60000.0).is_err());
    assert_eq!(room.calculate_rent(4), 240000.0);
}
