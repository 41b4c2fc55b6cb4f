//! Walk the command catalog against a seeded mock transceiver and print
//! what a freshly personalised card would report. Useful for seeing the
//! API shape without hardware; swap in a real `Transceiver` implementation
//! to talk to an actual reader.
//!
//! Run with: `cargo run --example mock_dump`

use libdesfire::prelude::*;
use libdesfire::status::PiccStatus;
use libdesfire::test_support::response_frame;

fn seeded_mock() -> MockTransceiver {
    let mut mock = MockTransceiver::new();

    // Activation: ATS then PPS echo.
    mock.push_response(vec![0x06, 0x75, 0x77, 0x81, 0x02]);
    mock.push_response(vec![0xD0]);

    // GetVersion: hardware, software, production info.
    mock.push_response(response_frame(
        PiccStatus::AdditionalFrame,
        &[0x04, 0x01, 0x01, 0x01, 0x00, 0x1A, 0x05],
    ));
    mock.push_response(response_frame(
        PiccStatus::AdditionalFrame,
        &[0x04, 0x01, 0x01, 0x01, 0x04, 0x1A, 0x05],
    ));
    let mut production = vec![0x04, 0x51, 0x2A, 0x1B, 0x60, 0x3D, 0x80];
    production.extend_from_slice(&[0xBA, 0x12, 0x34, 0x56, 0x78]);
    production.extend_from_slice(&[0x12, 0x16]);
    mock.push_response(response_frame(PiccStatus::OperationOk, &production));

    // GetApplicationIDs: one chained frame.
    mock.push_response(response_frame(PiccStatus::AdditionalFrame, &[0x01, 0x02, 0x03]));
    mock.push_response(response_frame(PiccStatus::OperationOk, &[0xAA, 0xBB, 0xCC]));

    // SelectApplication, GetFileIDs, GetValue for file 0x02.
    mock.push_response(response_frame(PiccStatus::OperationOk, &[]));
    mock.push_response(response_frame(PiccStatus::OperationOk, &[0x00, 0x02]));
    mock.push_response(response_frame(PiccStatus::OperationOk, &[0x10, 0x00, 0x00, 0x00]));

    mock
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut transceiver = seeded_mock();
    let mut session = activate(&mut transceiver, 0)?;

    let version = get_version(&mut session, &mut transceiver)?;
    println!(
        "card uid {} (hw v{}.{}, sw v{}.{})",
        version.uid_hex(),
        version.hardware.version_major,
        version.hardware.version_minor,
        version.software.version_major,
        version.software.version_minor,
    );

    let aids = get_application_ids(&mut session, &mut transceiver)?;
    println!("{} application(s):", aids.len());
    for aid in &aids {
        println!("  aid {}", aid.to_hex());
    }

    if let Some(first) = aids.first() {
        select_application(&mut session, &mut transceiver, *first)?;
        let files = get_file_ids(&mut session, &mut transceiver)?;
        println!("files in {}: {:?}", first.to_hex(), files);

        let value = get_value(&mut session, &mut transceiver, 0x02)?;
        println!("value file 0x02 holds {value}");
    }

    Ok(())
}
