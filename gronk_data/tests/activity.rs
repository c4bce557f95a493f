use gronk_data::Snapshot;

const ACTIVITY: &str = include_str!("fixtures/activity.json");

#[test]
fn decode_upstream_document() {
    let snapshot = Snapshot::from_json(ACTIVITY.as_bytes()).expect("fixture should decode");

    assert_eq!(snapshot.updated, 1_398_974_400);
    assert_eq!(snapshot.dimensions.racks, 48);
    assert_eq!(snapshot.running.len(), 3);
    assert_eq!(snapshot.queued.len(), 1);
    assert_eq!(snapshot.reservation.len(), 1);
    assert_eq!(snapshot.reservation[0].tminus, "91:00:00");
}

#[test]
fn upstream_document_sorted_for_display() {
    let mut snapshot = Snapshot::from_json(ACTIVITY.as_bytes()).expect("fixture should decode");
    snapshot.sort_running_by_walltime();

    let order: Vec<_> = snapshot.running.iter().map(|job| job.jobid).collect();
    assert_eq!(order, vec![264231, 264115, 264230]);
}
