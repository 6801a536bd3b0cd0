//! End-to-end control loop tests on the host
//!
//! Wires the public API together the way firmware would: an H-bridge output
//! over PWM pins, a current sensor, the mock clock, and a polling loop
//! calling `tick()` much faster than either regulator period.

use std::cell::Cell;
use std::rc::Rc;

use hbridge_ctl::control::{
    BufferSink, ControlMode, MotorConfig, MotorController, TelemetryReporter,
};
use hbridge_ctl::devices::{CurrentSensor, SensorError};
use hbridge_ctl::libraries::motor_driver::{Direction, HBridgeOutput};
use hbridge_ctl::platform::traits::time::{Clock, MockClock};
use hbridge_ctl::platform::{GpioInterface, PwmInterface, Result};

/// PWM pin double tracking the last duty written
#[derive(Default)]
struct TestPwm {
    duty: u8,
}

impl PwmInterface for TestPwm {
    fn write_duty(&mut self, duty: u8) -> Result<()> {
        self.duty = duty;
        Ok(())
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}

/// GPIO double for the sleep line
#[derive(Default)]
struct TestGpio {
    high: bool,
}

impl GpioInterface for TestGpio {
    fn set_high(&mut self) -> Result<()> {
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.high = false;
        Ok(())
    }

    fn is_high(&self) -> bool {
        self.high
    }
}

/// Sensor double whose reading the test adjusts while the controller owns it
#[derive(Clone, Default)]
struct SharedSensor {
    ma: Rc<Cell<f32>>,
    failing: Rc<Cell<bool>>,
}

impl SharedSensor {
    fn set_ma(&self, ma: f32) {
        self.ma.set(ma);
    }

    fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl CurrentSensor for SharedSensor {
    fn read_current_ma(&mut self) -> std::result::Result<f32, SensorError> {
        if self.failing.get() {
            return Err(SensorError::Unavailable);
        }
        Ok(self.ma.get())
    }
}

type TestBridge = HBridgeOutput<TestPwm, TestPwm, TestGpio>;

fn make_bridge() -> TestBridge {
    HBridgeOutput::new(TestPwm::default(), TestPwm::default(), TestGpio::default())
}

fn passthrough_config() -> MotorConfig {
    MotorConfig {
        filter_alpha: 1.0,
        ..Default::default()
    }
}

/// Poll `tick()` once per simulated millisecond for `ms` milliseconds
fn run_for_ms(
    motor: &mut MotorController<SharedSensor, TestBridge, &MockClock>,
    clock: &MockClock,
    ms: u32,
) {
    for _ in 0..ms {
        clock.advance_ms(1);
        motor.tick().unwrap();
    }
}

#[test]
fn speed_mode_ramps_to_cruise_with_exclusive_legs() {
    let clock = MockClock::new();
    let sensor = SharedSensor::default();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();

    motor
        .drive(0, Direction::Forward, ControlMode::SpeedControlled)
        .unwrap();

    let mut prev = 0u8;
    for _ in 0..2_000 {
        clock.advance_ms(1);
        motor.tick().unwrap();

        let (leg1, leg2) = motor.output().leg_duties();
        assert_eq!(leg2, 0, "reverse leg must stay off in forward drive");
        assert!(leg1 >= prev, "ramp must be monotonic");
        prev = leg1;
    }

    // 85 slew periods (1700 ms) are more than past; cruise reached exactly
    assert_eq!(motor.duty(), 255);
    assert_eq!(motor.output().leg_duties(), (255, 0));
    assert!(motor.output().is_enabled(), "sleep line must be active");
}

#[test]
fn current_mode_tracks_the_hysteresis_band() {
    let clock = MockClock::new();
    let sensor = SharedSensor::default();
    let handle = sensor.clone();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();

    motor
        .drive(200, Direction::Forward, ControlMode::CurrentLimited)
        .unwrap();

    // Over the 60 mA limit: duty backs off 1 per 2 ms period
    handle.set_ma(80.0);
    run_for_ms(&mut motor, &clock, 10);
    assert_eq!(motor.duty(), 195);

    // Under the 51 mA band floor: duty advances again
    handle.set_ma(40.0);
    run_for_ms(&mut motor, &clock, 6);
    assert_eq!(motor.duty(), 198);

    // Inside the band: hold
    handle.set_ma(55.0);
    run_for_ms(&mut motor, &clock, 20);
    assert_eq!(motor.duty(), 198);

    // The bridge saw every committed duty on the forward leg only
    assert_eq!(motor.output().leg_duties(), (198, 0));
}

#[test]
fn sensor_outage_holds_duty_until_recovery() {
    let clock = MockClock::new();
    let sensor = SharedSensor::default();
    let handle = sensor.clone();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();

    handle.set_ma(80.0);
    motor
        .drive(100, Direction::Forward, ControlMode::CurrentLimited)
        .unwrap();

    handle.set_failing(true);
    run_for_ms(&mut motor, &clock, 50);
    assert_eq!(motor.duty(), 100, "outage must hold, not drift");

    handle.set_failing(false);
    run_for_ms(&mut motor, &clock, 2);
    assert_eq!(motor.duty(), 99, "limiting resumes after recovery");
}

#[test]
fn stop_reaches_safe_state_from_any_point() {
    let clock = MockClock::new();
    let sensor = SharedSensor::default();
    let handle = sensor.clone();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();

    // Reverse drive reads negative raw current at the shunt
    handle.set_ma(-40.0);
    motor
        .drive(180, Direction::Reverse, ControlMode::CurrentLimited)
        .unwrap();
    run_for_ms(&mut motor, &clock, 7);

    motor.stop().unwrap();
    assert_eq!(motor.duty(), 0);
    assert_eq!(motor.direction(), Direction::Neutral);
    assert_eq!(motor.mode(), None);
    assert_eq!(motor.output().leg_duties(), (0, 0));

    // Idempotent, and ticking afterwards changes nothing
    motor.stop().unwrap();
    run_for_ms(&mut motor, &clock, 50);
    assert_eq!(motor.output().leg_duties(), (0, 0));
}

#[test]
fn telemetry_reports_at_its_own_rate() {
    let clock = MockClock::new();
    let sensor = SharedSensor::default();
    let handle = sensor.clone();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();
    let mut reporter = TelemetryReporter::new(100);
    let mut sink = BufferSink::<64>::new();

    handle.set_ma(80.0);
    motor
        .drive(200, Direction::Forward, ControlMode::CurrentLimited)
        .unwrap();

    // One second of polling at 1 kHz with 10 Hz telemetry
    for _ in 0..1_000 {
        clock.advance_ms(1);
        motor.tick().unwrap();
        reporter.poll(clock.now_ms(), motor.snapshot(), &mut sink);
    }

    assert_eq!(sink.records().len(), 10);
    for record in sink.records() {
        assert_eq!(record.raw_ma, 80.0);
        assert!(record.duty <= 200);
    }
    // Duty decreases across successive records while over the limit
    assert!(sink.records()[0].duty > sink.records()[9].duty);
}

#[test]
fn regulators_keep_running_across_clock_wraparound() {
    // Start 100 ms (in us) before the 32-bit microsecond counter wraps
    let clock = MockClock::starting_at_us(u32::MAX as u64 - 100_000);
    let sensor = SharedSensor::default();
    let handle = sensor.clone();
    let mut motor =
        MotorController::new(sensor, make_bridge(), &clock, passthrough_config()).unwrap();

    handle.set_ma(80.0);
    motor
        .drive(200, Direction::Forward, ControlMode::CurrentLimited)
        .unwrap();

    // 400 ms of polling spans the wrap; the 500 Hz loop must keep stepping
    run_for_ms(&mut motor, &clock, 400);
    assert_eq!(motor.duty(), 0, "limit loop must not stall at the wrap");
}
