use ostms::{
    acquisition::Acquisition,
    calibration::{CalibrationTable, PT100},
    channel::{CHANNELS, REFERENCE, SLOTS},
    convert::Conversion,
    testing::{isclose, Loopback, SimulatedAdc, SimulatedDelay},
    Instant,
};
use serde::Deserialize;

type Simulated = Acquisition<SimulatedAdc, SimulatedDelay, Loopback>;

#[derive(Deserialize, Debug)]
struct Record<'a> {
    data: &'a str,
    temps: [Option<f32>; SLOTS],
}

#[derive(Deserialize, Debug)]
struct Notice<'a> {
    #[serde(rename = "type")]
    level: &'a str,
    message: &'a str,
}

fn pt100_reference() -> CalibrationTable {
    CalibrationTable::new(&PT100).unwrap()
}

fn setup(adc: SimulatedAdc) -> Simulated {
    let mut channels = CHANNELS;
    channels[REFERENCE] = channels[REFERENCE]
        .with_conversion(Conversion::Table(pt100_reference()));

    let mut acquisition = Acquisition::new(
        adc,
        SimulatedDelay::default(),
        Loopback::default(),
        channels,
        Instant::from_ticks(0),
    );
    acquisition.probe().unwrap();
    acquisition
}

fn records(acquisition: &Simulated) -> Vec<[Option<f32>; SLOTS]> {
    acquisition
        .interface()
        .lines()
        .filter_map(|line| serde_json_core::from_str::<Record>(line).ok())
        .map(|(record, _)| {
            assert_eq!(record.data, "thermistors");
            record.temps
        })
        .collect()
}

fn notices(acquisition: &Simulated) -> Vec<(String, String)> {
    acquisition
        .interface()
        .lines()
        .filter_map(|line| serde_json_core::from_str::<Notice>(line).ok())
        .map(|(notice, _)| (notice.level.into(), notice.message.into()))
        .collect()
}

fn run(acquisition: &mut Simulated, count: usize) {
    for _ in 0..1000 {
        if records(acquisition).len() >= count {
            return;
        }
        let now = Instant::from_ticks(acquisition.delay().elapsed_ms() as u32);
        acquisition.service(now, true).unwrap();
    }
    panic!("Acquisition stalled");
}

#[test]
fn every_line_is_json() {
    let mut acquisition = setup(SimulatedAdc::new());
    run(&mut acquisition, 2);
    let output = acquisition.interface().output();
    assert!(output.ends_with('\n'));
    for line in output.lines() {
        assert!(
            serde_json_core::from_str::<Record>(line).is_ok()
                || serde_json_core::from_str::<Notice>(line).is_ok(),
            "{line}"
        );
    }
    assert_eq!(
        notices(&acquisition)[0],
        (String::from("Info"), String::from("ADC 1 found"))
    );
}

#[test]
fn reference_from_calibration_table() {
    let mut adc = SimulatedAdc::new();
    adc.set_resistance(REFERENCE, 110.0);
    let mut acquisition = setup(adc);
    acquisition.interface_mut().host_sends("REF ON\r\n");

    run(&mut acquisition, 2);

    let records = records(&acquisition);
    // The command takes effect from the cycle after it was received.
    assert_eq!(records[0][REFERENCE], Some(0.0));
    let expected = pt100_reference().interpolate(110.0);
    let reference = records[1][REFERENCE].unwrap();
    assert!(isclose(reference, expected, 0.0, 0.02), "{reference}");
    assert!(reference > 25.0 && reference < 27.0);
    let ack = (String::from("Info"), String::from("Ref On"));
    assert!(notices(&acquisition).contains(&ack));
}

#[test]
fn faulty_sensors_are_null() {
    let mut adc = SimulatedAdc::new();
    adc.set_code(1, 0x7fffff);
    adc.set_code(4, 0);
    adc.set_resistance(5, 20_000.0);
    let mut acquisition = setup(adc);

    run(&mut acquisition, 1);

    let record = records(&acquisition)[0];
    assert_eq!(record[1], None);
    assert_eq!(record[4], None);
    for channel in [0, 2, 3] {
        assert!(isclose(record[channel].unwrap(), 25.0, 0.0, 0.01));
    }
    // Colder than nominal at twice the nominal resistance.
    assert!(record[5].unwrap() < 15.0);
    assert_eq!(record[REFERENCE], Some(0.0));
}

#[test]
fn commands_are_acknowledged() {
    let mut acquisition = setup(SimulatedAdc::new());
    acquisition
        .interface_mut()
        .host_sends("REF ON\nFOO BAR\nREF OFF\n");

    run(&mut acquisition, 3);

    let notices = notices(&acquisition);
    let replies: Vec<&str> = notices
        .iter()
        .skip(1)
        .map(|(_, message)| message.as_str())
        .collect();
    assert_eq!(replies, ["Ref On", "ERROR UNKNOWN COMMAND", "Ref Off"]);
    assert!(!acquisition.sequencer().reference_enabled());
    assert!(records(&acquisition)
        .iter()
        .all(|record| record[REFERENCE] == Some(0.0)));
}

#[test]
fn cycle_time_is_bounded() {
    let mut acquisition = setup(SimulatedAdc::new());
    acquisition.interface_mut().host_sends("REF ON\n");
    run(&mut acquisition, 1);
    let start = acquisition.delay().elapsed_ms();
    run(&mut acquisition, 2);
    // Seven channels with settle and gap delays
    assert!(acquisition.delay().elapsed_ms() - start <= 3_000);
}

#[test]
fn congested_link_keeps_whole_lines() {
    let mut acquisition = setup(SimulatedAdc::new());
    acquisition.interface_mut().clear_output();
    acquisition.interface_mut().set_free(Some(30));
    for _ in 0..200 {
        let now = Instant::from_ticks(acquisition.delay().elapsed_ms() as u32);
        acquisition.service(now, true).unwrap();
    }
    assert_eq!(acquisition.interface().output().len(), 30);

    acquisition.interface_mut().set_free(None);
    run(&mut acquisition, 2);
    let output = acquisition.interface().output();
    for line in output.lines() {
        assert!(
            serde_json_core::from_str::<Record>(line).is_ok()
                || serde_json_core::from_str::<Notice>(line).is_ok(),
            "{line}"
        );
    }
}
