use std::error::Error;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use faultseg::core::parse_fault_list;
use faultseg::{CodeTable, CycleTiming, CyclerError, DisplayCycler, FaultRegistry, StatusDisplay};
use faultseg_testing::VirtualDisplay;

fn fast_timing() -> CycleTiming {
    CycleTiming::new(Duration::from_millis(1), Duration::from_millis(1))
}

/// Runs a rotation on a virtual display for `duration`, stops it, and
/// returns the display for inspection.
fn run_rotation(registry: Arc<FaultRegistry>, duration: Duration) -> VirtualDisplay {
    let mut cycler = DisplayCycler::new(registry, VirtualDisplay::new()).with_timing(fast_timing());
    let (stop, stop_rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let result = cycler.run(stop_rx);
        (cycler, result)
    });

    thread::sleep(duration);
    stop.send(()).unwrap();

    let (cycler, result) = worker.join().unwrap();
    result.unwrap();
    cycler.into_display()
}

#[test]
fn rotation_renders_count_then_each_code() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("lidar_fail, gps_fail"));

    let display = run_rotation(registry, Duration::from_millis(100));

    let frames = display.frames();
    assert!(frames.len() >= 6, "only {} frames rendered", frames.len());
    for rotation in frames.chunks_exact(3) {
        assert_eq!(["2---", "2201", "2207"], rotation);
    }
}

#[test]
fn indicator_stays_off() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("lidar_fail, gps_fail"));

    let display = run_rotation(registry, Duration::from_millis(50));

    // One indicator write per frame, all off.
    assert_eq!(display.frames().len(), display.indicators().len());
    assert!(display.indicators().iter().all(|&on| !on));
}

#[test]
fn empty_registry_renders_all_zeros() {
    let registry = Arc::new(FaultRegistry::new());

    let display = run_rotation(registry, Duration::from_millis(50));

    assert!(!display.frames().is_empty());
    assert!(display.frames().iter().all(|frame| frame == "0000"));
}

#[test]
fn unmapped_identifier_renders_fallback_code() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("unknown_x"));

    let display = run_rotation(registry, Duration::from_millis(50));

    for rotation in display.frames().chunks_exact(2) {
        assert_eq!(["1---", "1999"], rotation);
    }
}

#[test]
fn ten_faults_render_leading_count_digit_only() {
    let registry = Arc::new(FaultRegistry::new());
    let payload = vec!["lidar_fail"; 10].join(", ");
    registry.replace(&parse_fault_list(&payload));

    let display = run_rotation(registry, Duration::from_millis(100));

    // Ten faults show count digit '1', not "10".
    assert_eq!("1---", display.frames()[0]);
    assert_eq!("1201", display.frames()[1]);
}

#[test]
fn custom_code_table_resolves_lookups() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("motor_fail"));

    let mut cycler = DisplayCycler::new(registry, VirtualDisplay::new())
        .with_codes(CodeTable::new([("motor_fail", "301")]))
        .with_timing(fast_timing());

    let (stop, stop_rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let result = cycler.run(stop_rx);
        (cycler, result)
    });
    thread::sleep(Duration::from_millis(50));
    stop.send(()).unwrap();
    let (cycler, result) = worker.join().unwrap();
    result.unwrap();

    assert_eq!("1301", cycler.display().frames()[1]);
}

#[test]
fn update_is_picked_up_at_next_rotation_start() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("lidar_fail"));

    let mut cycler =
        DisplayCycler::new(Arc::clone(&registry), VirtualDisplay::new()).with_timing(fast_timing());
    let (stop, stop_rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let result = cycler.run(stop_rx);
        (cycler, result)
    });

    thread::sleep(Duration::from_millis(30));
    registry.replace(&[]);
    thread::sleep(Duration::from_millis(30));
    stop.send(()).unwrap();

    let (cycler, result) = worker.join().unwrap();
    result.unwrap();
    let frames = cycler.display().frames();

    // The old rotation rendered, then the cleared list took over; no frame
    // comes from anywhere else.
    assert_eq!("1---", frames[0]);
    assert_eq!("1201", frames[1]);
    assert!(frames.contains(&"0000".to_owned()));
    assert!(frames
        .iter()
        .all(|frame| frame == "1---" || frame == "1201" || frame == "0000"));
}

#[test]
fn dropping_all_stop_senders_stops_the_loop() {
    let registry = Arc::new(FaultRegistry::new());
    let mut cycler = DisplayCycler::new(registry, VirtualDisplay::new()).with_timing(fast_timing());

    let (stop, stop_rx) = mpsc::channel::<()>();
    drop(stop);

    // Runs on the current thread; the disconnected channel winds it down at
    // the first hold point.
    cycler.run(stop_rx).unwrap();
    assert_eq!(["0000"], cycler.display().frames());
}

/// Display that checks each printed frame against a script and fails the
/// print after the script runs out.
#[derive(Debug)]
struct ScriptedDisplay {
    expected: Vec<&'static str>,
    printed: usize,
}

impl ScriptedDisplay {
    fn new(expected: Vec<&'static str>) -> Self {
        ScriptedDisplay { expected, printed: 0 }
    }
}

impl StatusDisplay for ScriptedDisplay {
    fn print(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self.expected.get(self.printed) {
            Some(&want) => {
                assert_eq!(want, text);
                self.printed += 1;
                Ok(())
            }
            None => Err("script complete".into()),
        }
    }

    fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        assert!(!on, "rotation lit the indicator");
        Ok(())
    }

    fn run(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}

#[test]
fn rotation_follows_script_exactly() {
    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("lidar_fail, gps_fail"));

    let script = vec!["2---", "2201", "2207", "2---", "2201", "2207"];
    let mut cycler = DisplayCycler::new(registry, ScriptedDisplay::new(script)).with_timing(fast_timing());

    // The script failing the seventh print surfaces as a display error and
    // ends the loop without a stop signal.
    let (_stop, stop_rx) = mpsc::channel();
    let err = cycler.run(stop_rx).unwrap_err();
    assert!(matches!(err, CyclerError::Display { .. }));
    assert_eq!(6, cycler.display().printed);
}
