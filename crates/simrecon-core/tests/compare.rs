use simrecon_core::{
    compare, BillingSource, Cell, ColumnNames, CoreErrorKind, Direction, MismatchResult, RawTable,
    Region,
};

fn inventory(name: &str, sims: &[Cell]) -> RawTable {
    RawTable::new(
        name,
        vec!["Sim Card".to_string(), "Device".to_string()],
        sims.iter()
            .map(|sim| vec![sim.clone(), Cell::text("tracker")])
            .collect(),
    )
}

fn billing(name: &str, rows: &[(Cell, Cell, &str)]) -> RawTable {
    RawTable::new(
        name,
        vec![
            "MSISDN".to_string(),
            "TAGIHAN".to_string(),
            "STATUS_LAYANAN".to_string(),
        ],
        rows.iter()
            .map(|(id, price, status)| vec![id.clone(), price.clone(), Cell::text(*status)])
            .collect(),
    )
}

fn sources(jakarta: RawTable, kalimantan: RawTable, extras: Vec<RawTable>) -> Vec<BillingSource> {
    let mut sources = vec![
        BillingSource::new(jakarta, Region::jakarta()),
        BillingSource::new(kalimantan, Region::kalimantan()),
    ];
    for (idx, table) in extras.into_iter().enumerate() {
        sources.push(BillingSource::new(table, Region::extra(idx + 1)));
    }
    sources
}

#[test]
fn matched_and_cancelled_rows_leave_nothing_to_report() {
    let inventories = vec![inventory("iluva.xlsx", &[Cell::text("081111111111")])];
    let billing_sources = sources(
        billing(
            "jakarta.xlsx",
            &[
                (Cell::text("6281111111111"), Cell::Int(10000), "AKTIF"),
                (Cell::text("082222222222"), Cell::Int(5000), "C"),
            ],
        ),
        billing("kalimantan.xlsx", &[]),
        Vec::new(),
    );

    for direction in Direction::all() {
        let comparison = compare(
            *direction,
            &inventories,
            &billing_sources,
            &ColumnNames::default(),
        )
        .expect("compare");
        assert!(comparison.result.is_empty(), "{direction:?}");
        assert_eq!(comparison.result.direction(), *direction);
    }
}

#[test]
fn unmatched_numbers_are_reported_in_both_directions() {
    let inventories = vec![inventory("iluva.xlsx", &[Cell::text("083333333333")])];
    let billing_sources = sources(
        billing("jakarta.xlsx", &[]),
        billing(
            "kalimantan.xlsx",
            &[(Cell::text("084444444444"), Cell::Int(1000), "AKTIF")],
        ),
        Vec::new(),
    );
    let columns = ColumnNames::default();

    let billed = compare(
        Direction::BilledUntracked,
        &inventories,
        &billing_sources,
        &columns,
    )
    .expect("compare");
    let MismatchResult::BilledUntracked(records) = billed.result else {
        panic!("expected billed-untracked result");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.as_str(), "084444444444");
    assert_eq!(records[0].price, 1000);
    assert_eq!(records[0].status, "AKTIF");
    assert_eq!(records[0].region.as_str(), "Kalimantan");

    let tracked = compare(
        Direction::TrackedUnbilled,
        &inventories,
        &billing_sources,
        &columns,
    )
    .expect("compare");
    let MismatchResult::TrackedUnbilled(ids) = tracked.result else {
        panic!("expected tracked-unbilled result");
    };
    let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["083333333333"]);
}

#[test]
fn identical_rows_from_different_regions_are_both_kept() {
    let row = (Cell::text("0855"), Cell::Int(7000), "AKTIF");
    let billing_sources = sources(
        billing("jakarta.xlsx", &[row.clone(), row.clone()]),
        billing("kalimantan.xlsx", &[]),
        vec![billing("extra.xlsx", &[row])],
    );

    let comparison = compare(
        Direction::BilledUntracked,
        &[inventory("iluva.xlsx", &[])],
        &billing_sources,
        &ColumnNames::default(),
    )
    .expect("compare");

    let MismatchResult::BilledUntracked(records) = comparison.result else {
        panic!("expected billed-untracked result");
    };
    let regions: Vec<&str> = records.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(regions, vec!["Jakarta", "Extra-1"]);
    assert_eq!(comparison.billing[0].duplicates, 1);
}

#[test]
fn stats_account_for_rows_collapsed_across_sources() {
    let row = (Cell::text("0855"), Cell::Int(7000), "AKTIF");
    let billing_sources = vec![
        BillingSource::new(billing("jakarta-a.xlsx", &[row.clone()]), Region::jakarta()),
        BillingSource::new(
            billing("jakarta-b.xlsx", &[row, (Cell::text("0866"), Cell::Int(1), "AKTIF")]),
            Region::jakarta(),
        ),
    ];

    let comparison = compare(
        Direction::BilledUntracked,
        &[inventory("iluva.xlsx", &[])],
        &billing_sources,
        &ColumnNames::default(),
    )
    .expect("compare");

    let kept: usize = comparison.billing.iter().map(|stats| stats.kept).sum();
    assert_eq!(kept, comparison.result.len());
    assert_eq!(comparison.result.len(), 2);
    assert_eq!(comparison.billing[1].duplicates, 1);
    assert_eq!(comparison.billing[1].kept, 1);
}

#[test]
fn inventories_are_unioned_before_reconciling() {
    let inventories = vec![
        inventory("iluva-a.xlsx", &[Cell::Float(6281111111111.0)]),
        inventory("iluva-b.xlsx", &[Cell::text("81111111111"), Cell::Int(82222222222)]),
    ];
    let billing_sources = sources(
        billing(
            "jakarta.xlsx",
            &[(Cell::text("0811 1111 1111"), Cell::text("abc"), "aktif")],
        ),
        billing("kalimantan.xlsx", &[]),
        Vec::new(),
    );

    let comparison = compare(
        Direction::TrackedUnbilled,
        &inventories,
        &billing_sources,
        &ColumnNames::default(),
    )
    .expect("compare");
    let rows: usize = comparison.inventory.iter().map(|stats| stats.rows).sum();
    assert_eq!(rows, 3);
    assert_eq!(comparison.inventory[1].source, "iluva-b.xlsx");
    assert_eq!(comparison.inventory[1].unique, 2);
    assert_eq!(comparison.tracked, 2);
    let MismatchResult::TrackedUnbilled(ids) = comparison.result else {
        panic!("expected tracked-unbilled result");
    };
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].as_str(), "082222222222");
}

#[test]
fn missing_inputs_are_rejected_before_loading() {
    let broken = RawTable::new("broken.xlsx", Vec::new(), Vec::new());
    let err = compare(
        Direction::BilledUntracked,
        &[],
        &sources(broken.clone(), broken.clone(), Vec::new()),
        &ColumnNames::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), CoreErrorKind::MissingInput);

    let err = compare(
        Direction::BilledUntracked,
        &[broken.clone()],
        &[BillingSource::new(broken, Region::jakarta())],
        &ColumnNames::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), CoreErrorKind::MissingInput);
}

#[test]
fn schema_error_aborts_the_whole_run() {
    let inventories = vec![inventory("iluva.xlsx", &[Cell::text("0811")])];
    let mut billing_sources = sources(
        billing("jakarta.xlsx", &[]),
        billing("kalimantan.xlsx", &[]),
        Vec::new(),
    );
    billing_sources[1].table.headers.pop();

    let err = compare(
        Direction::BilledUntracked,
        &inventories,
        &billing_sources,
        &ColumnNames::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), CoreErrorKind::Schema);
    assert_eq!(
        err.to_string(),
        "missing column 'STATUS_LAYANAN' in kalimantan.xlsx"
    );
}

#[test]
fn custom_column_names_are_honoured() {
    let columns = ColumnNames {
        sim_card: "ICCID Phone".to_string(),
        ..ColumnNames::default()
    };
    let table = RawTable::new(
        "iluva.xlsx",
        vec!["ICCID Phone".to_string()],
        vec![vec![Cell::text("0899")]],
    );
    let comparison = compare(
        Direction::TrackedUnbilled,
        &[table],
        &sources(
            billing("jakarta.xlsx", &[]),
            billing("kalimantan.xlsx", &[]),
            Vec::new(),
        ),
        &columns,
    )
    .expect("compare");
    assert_eq!(comparison.result.len(), 1);
}
