use super::*;
use crate::foundation::error::CellviewError;

#[test]
fn runs_exactly_max_cycles_in_order() {
    let sched = Scheduler::new(Duration::from_millis(1), Some(4));
    let mut seen = Vec::new();
    let report = sched.run(|idx| {
        seen.push(idx);
        Ok(())
    });
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(
        report,
        SchedulerReport {
            cycles_run: 4,
            cycles_failed: 0
        }
    );
}

#[test]
fn failed_cycles_do_not_stop_the_loop() {
    let sched = Scheduler::new(Duration::from_millis(1), Some(5));
    let report = sched.run(|idx| {
        if idx % 2 == 0 {
            Err(CellviewError::input("missing"))
        } else {
            Ok(())
        }
    });
    assert_eq!(report.cycles_run, 5);
    assert_eq!(report.cycles_failed, 3);
}

#[test]
fn stop_handle_ends_the_loop_after_current_cycle() {
    let sched = Scheduler::new(Duration::from_millis(1), None);
    let stop = sched.stop_handle();
    let report = sched.run(|idx| {
        if idx == 2 {
            stop.stop();
        }
        Ok(())
    });
    assert_eq!(report.cycles_run, 3);
}

#[test]
fn stopped_before_start_runs_nothing() {
    let sched = Scheduler::new(Duration::from_secs(1), None);
    sched.stop_handle().stop();
    let report = sched.run(|_| panic!("must not run"));
    assert_eq!(report.cycles_run, 0);
}

#[test]
fn cycles_are_paced_by_the_period() {
    let period = Duration::from_millis(20);
    let sched = Scheduler::new(period, Some(3));
    let started = Instant::now();
    sched.run(|_| Ok(()));
    // Two sleeps between three cycles, none after the last.
    assert!(started.elapsed() >= period * 2);
}

#[test]
fn stop_interrupts_a_long_sleep() {
    let sched = Scheduler::new(Duration::from_secs(60), None);
    let stop = sched.stop_handle();
    let waker = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(30));
        stop.stop();
    });
    let started = Instant::now();
    let report = sched.run(|_| Ok(()));
    waker.join().unwrap();
    assert_eq!(report.cycles_run, 1);
    assert!(started.elapsed() < Duration::from_secs(5));
}
