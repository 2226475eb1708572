use worklog::core::mock::create_mock_ledger;
use worklog::db::kv;
use worklog::db::log::{load_log, ttlog};
use worklog::db::monthly::{load_monthly_ledger, month_key, save_monthly_ledger, saved_months};
use worklog::db::pool::DbPool;
use worklog::errors::AppError;
use worklog::models::YearMonth;

fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

#[test]
fn test_kv_put_get_and_overwrite() {
    let mut pool = DbPool::in_memory().unwrap();

    assert_eq!(kv::get(&mut pool, "missing").unwrap(), None);

    kv::put(&mut pool, "a", "1").unwrap();
    kv::put(&mut pool, "a", "2").unwrap();
    assert_eq!(kv::get(&mut pool, "a").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_kv_prefix_listing() {
    let mut pool = DbPool::in_memory().unwrap();
    kv::put(&mut pool, "worklog-2025-01", "{}").unwrap();
    kv::put(&mut pool, "worklog-2025-02", "{}").unwrap();
    kv::put(&mut pool, "settings", "{}").unwrap();

    let keys = kv::list_keys_with_prefix(&mut pool, "worklog-").unwrap();
    assert_eq!(keys, vec!["worklog-2025-01", "worklog-2025-02"]);
}

#[test]
fn test_ledger_snapshot_round_trip() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut ledger = create_mock_ledger(ym("2024-02")).unwrap();
    ledger.days[0].break_duration = "0:45".to_string();

    save_monthly_ledger(&mut pool, &ledger).unwrap();
    let loaded = load_monthly_ledger(&mut pool, ym("2024-02")).unwrap().unwrap();

    assert_eq!(loaded, ledger);
    assert_eq!(loaded.days[0].working_duration(), "8:15");
    assert_eq!(load_monthly_ledger(&mut pool, ym("2024-03")).unwrap(), None);
}

#[test]
fn test_saved_months_newest_first() {
    let mut pool = DbPool::in_memory().unwrap();
    for m in ["2024-11", "2025-02", "2024-12"] {
        save_monthly_ledger(&mut pool, &create_mock_ledger(ym(m)).unwrap()).unwrap();
    }
    kv::put(&mut pool, "worklog-garbage", "{}").unwrap();

    let months: Vec<String> = saved_months(&mut pool)
        .unwrap()
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(months, vec!["2025-02", "2024-12", "2024-11"]);
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let mut pool = DbPool::in_memory().unwrap();
    kv::put(&mut pool, &month_key(ym("2025-01")), "not json").unwrap();

    let err = load_monthly_ledger(&mut pool, ym("2025-01")).unwrap_err();
    assert!(matches!(err, AppError::Cache(_)));
}

#[test]
fn test_snapshot_with_missing_days_is_rejected() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut ledger = create_mock_ledger(ym("2025-01")).unwrap();
    ledger.days.pop();
    kv::put(
        &mut pool,
        &month_key(ym("2025-01")),
        &serde_json::to_string(&ledger).unwrap(),
    )
    .unwrap();

    assert!(matches!(
        load_monthly_ledger(&mut pool, ym("2025-01")),
        Err(AppError::Cache(_))
    ));
}

#[test]
fn test_internal_log() {
    let mut pool = DbPool::in_memory().unwrap();
    ttlog(&pool.conn, "fetch", "2025-03", "21 attended days").unwrap();
    ttlog(&pool.conn, "break", "2025-03-03", "break set to 0:30").unwrap();

    let entries = load_log(&mut pool, 10).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "break");
    assert_eq!(entries[1].target, "2025-03");
}
