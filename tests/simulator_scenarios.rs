//! End-to-end policy scenarios.
//!
//! Each test drives a fresh simulator through a short reference string and
//! checks every step's outcome, evicted page and resulting frame layout.

use pagesim::{
    parse_reference_string, Action, Driver, Error, FrameId, MemorySimulator, PageId, Policy,
    StepRecord,
};

fn create_sim(frames: usize, policy: Policy, reference: &str) -> MemorySimulator {
    let mut sim = MemorySimulator::new();
    sim.initialize(frames, 1024, policy).unwrap();
    sim.set_reference_string(parse_reference_string(reference).unwrap());
    sim
}

fn run_all(sim: MemorySimulator) -> (Vec<StepRecord>, MemorySimulator) {
    let mut driver = Driver::new(sim);
    let records = driver.run_all().unwrap();
    (records, driver.into_inner())
}

/// Frame layout helper: 0 marks a free frame in these scenarios.
fn layout(ids: &[u32]) -> Vec<Option<PageId>> {
    ids.iter()
        .map(|&p| if p == 0 { None } else { Some(PageId(p)) })
        .collect()
}

fn evicted(records: &[StepRecord]) -> Vec<Option<u32>> {
    records.iter().map(|r| r.evicted_page.map(|p| p.0)).collect()
}

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_evicts_in_load_order() {
    let (records, sim) = run_all(create_sim(3, Policy::Fifo, "1,2,3,4,1,2,5"));

    assert!(records.iter().all(|r| r.page_fault));
    assert_eq!(
        evicted(&records),
        vec![None, None, None, Some(1), Some(2), Some(3), Some(4)]
    );
    assert_eq!(records[3].frame_index, FrameId(0));
    assert_eq!(records[6].memory_snapshot, layout(&[5, 1, 2]));

    let stats = sim.get_statistics().unwrap();
    assert_eq!(stats.page_faults, 7);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.evictions, 4);
    assert_eq!(stats.fault_ratio, 1.0);
}

#[test]
fn test_fifo_belady_anomaly() {
    let reference = "1,2,3,4,1,2,5,1,2,3,4,5";

    let (_, three) = run_all(create_sim(3, Policy::Fifo, reference));
    let (_, four) = run_all(create_sim(4, Policy::Fifo, reference));

    assert_eq!(three.get_statistics().unwrap().page_faults, 9);
    assert_eq!(four.get_statistics().unwrap().page_faults, 10);
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_evicts_least_recently_used() {
    let (records, sim) = run_all(create_sim(3, Policy::Lru, "1,2,3,1,2,4"));

    let actions: Vec<_> = records.iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![
            Action::PageFault,
            Action::PageFault,
            Action::PageFault,
            Action::Hit,
            Action::Hit,
            Action::PageFault,
        ]
    );
    assert_eq!(records[5].evicted_page, Some(PageId(3)));
    assert_eq!(records[5].frame_index, FrameId(2));
    assert_eq!(records[5].memory_snapshot, layout(&[1, 2, 4]));

    let stats = sim.get_statistics().unwrap();
    assert_eq!(stats.page_faults, 4);
    assert_eq!(stats.hits, 2);
}

// ============================================================================
// OPTIMAL
// ============================================================================

#[test]
fn test_optimal_evicts_page_never_used_again() {
    let (records, sim) = run_all(create_sim(2, Policy::Optimal, "1,2,3,1"));

    assert_eq!(records[2].evicted_page, Some(PageId(2)));
    assert_eq!(records[2].memory_snapshot, layout(&[1, 3]));
    assert_eq!(records[3].action, Action::Hit);
    assert_eq!(records[3].frame_index, FrameId(0));

    let stats = sim.get_statistics().unwrap();
    assert_eq!(stats.page_faults, 3);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_optimal_textbook_string() {
    let (_, sim) = run_all(create_sim(3, Policy::Optimal, "7,0,1,2,0,3,0,4,2,3,0,3,2"));
    assert_eq!(sim.get_statistics().unwrap().page_faults, 7);
}

// ============================================================================
// CLOCK
// ============================================================================

#[test]
fn test_clock_second_chance_sweep() {
    let (records, sim) = run_all(create_sim(2, Policy::Clock, "1,2,3"));

    assert_eq!(records[2].evicted_page, Some(PageId(1)));
    assert_eq!(records[2].frame_index, FrameId(0));
    assert_eq!(sim.clock_hand(), 1);

    let state = sim.get_memory_state();
    // New page arrives with its bit set; the survivor lost its second chance
    assert!(state[0].reference_bit);
    assert!(!state[1].reference_bit);
}

#[test]
fn test_clock_hand_advances_across_faults() {
    let (records, sim) = run_all(create_sim(3, Policy::Clock, "1,2,3,2,4,1,5"));

    assert_eq!(records[3].action, Action::Hit);
    assert_eq!(
        evicted(&records),
        vec![None, None, None, None, Some(1), Some(2), Some(3)]
    );
    assert_eq!(records[6].memory_snapshot, layout(&[4, 1, 5]));
    assert_eq!(sim.clock_hand(), 0);
}

// ============================================================================
// LFU / MFU
// ============================================================================

#[test]
fn test_lfu_evicts_least_frequently_used() {
    let (records, _) = run_all(create_sim(3, Policy::Lfu, "1,1,2,3,4,2,5"));

    assert_eq!(
        evicted(&records),
        vec![None, None, None, None, Some(2), Some(4), Some(2)]
    );
    assert_eq!(records[6].memory_snapshot, layout(&[1, 5, 3]));
}

#[test]
fn test_mfu_evicts_most_frequently_used() {
    let (records, sim) = run_all(create_sim(3, Policy::Mfu, "1,1,2,3,4,2,5"));

    assert_eq!(records[4].evicted_page, Some(PageId(1)));
    assert_eq!(records[5].action, Action::Hit);
    assert_eq!(records[6].evicted_page, Some(PageId(2)));
    assert_eq!(records[6].memory_snapshot, layout(&[4, 5, 3]));
    assert_eq!(sim.get_statistics().unwrap().hits, 2);
}

// ============================================================================
// RANDOM
// ============================================================================

#[test]
fn test_random_victims_stay_in_range() {
    let mut sim = create_sim(3, Policy::Random, "1,2,3,4,5,6,7,8,9,10,11,12");
    sim.seed_rng(2024);
    let (records, sim) = run_all(sim);

    for record in &records[3..] {
        assert!(record.page_fault);
        assert!(record.frame_index.index() < 3);
        assert!(record.evicted_page.is_some());
    }
    assert_eq!(sim.get_statistics().unwrap().page_faults, 12);
}

// ============================================================================
// Accessors and errors
// ============================================================================

#[test]
fn test_history_log_lines() {
    let (records, _) = run_all(create_sim(3, Policy::Fifo, "1,2,3,4,1"));

    let lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "Step 01: Page 1 - Page Fault (Loaded in frame 0)");
    assert_eq!(
        lines[3],
        "Step 04: Page 4 - Page Fault (Replaced page 1 in frame 0)"
    );
}

#[test]
fn test_memory_state_and_page_table_agree() {
    let (_, sim) = run_all(create_sim(4, Policy::Lru, "3,1,4,1,5,9,2,6"));

    let table = sim.get_page_table();
    for state in sim.get_memory_state() {
        assert!(state.allocated);
        let page = state.page.unwrap();
        assert_eq!(table[&page], state.frame_index);
    }
    assert_eq!(table.len(), 4);
}

#[test]
fn test_statistics_require_initialize() {
    let sim = MemorySimulator::new();
    assert_eq!(sim.get_statistics(), Err(Error::Uninitialized));
    assert!(sim.get_memory_state().is_empty());
}

#[test]
fn test_reinitialize_discards_history() {
    let (_, mut sim) = run_all(create_sim(2, Policy::Fifo, "1,2,3"));

    sim.initialize(5, 4096, Policy::Mfu).unwrap();

    assert!(sim.history().is_empty());
    assert_eq!(sim.get_memory_state().len(), 5);
    assert_eq!(sim.get_statistics().unwrap().policy, Policy::Mfu);
    assert_eq!(sim.config().unwrap().page_size(), 4096);
}
