//! Apply API Demonstration
//!
//! This example drives an employee store through the `apply()` command
//! boundary.
//!
//! Key concepts illustrated:
//! 1. Command-based mutations
//! 2. Typed and dynamic field updates
//! 3. Atomicity guarantees on rejected commands
//! 4. Recording store events with an injected observer

use roster_core::{
    apply, Applied, Command, EmployeeRecord, EmployeeStore, FieldUpdate, FieldValue,
    RecordingObserver, RosterError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Roster Apply API Demo ===\n");

    let recorder = RecordingObserver::new();
    let mut store = EmployeeStore::with_observer(recorder.clone());

    // ===== Part 1: Adding Records =====
    println!("## Part 1: Adding records\n");

    for record in [
        EmployeeRecord::new("EMP001".to_string(), "John Doe", "Engineering", 50_000.0, 4.5, 5, true),
        EmployeeRecord::new("EMP002".to_string(), "Jane Smith", "Engineering", 60_000.0, 4.8, 7, true),
        EmployeeRecord::new("EMP003".to_string(), "Bob Johnson", "Marketing", 45_000.0, 4.2, 3, true),
    ] {
        if let Applied::Added { employee_id } = apply(&mut store, Command::Add(record))? {
            println!("✓ Added {}", employee_id);
        }
    }

    // ===== Part 2: Updates =====
    println!("\n## Part 2: Updates\n");

    apply(
        &mut store,
        Command::Update {
            employee_id: "EMP001".to_string(),
            update: FieldUpdate::Salary(55_000.0),
        },
    )?;
    apply(
        &mut store,
        Command::UpdateField {
            employee_id: "EMP003".to_string(),
            field: "department".to_string(),
            value: FieldValue::from("Sales"),
        },
    )?;
    println!("✓ EMP001 salary is now {}", store.get(&"EMP001".to_string())?.salary);
    println!("✓ EMP003 moved to {}", store.get(&"EMP003".to_string())?.department);

    // ===== Part 3: Atomicity =====
    println!("\n## Part 3: Rejected commands change nothing\n");

    let result = apply(
        &mut store,
        Command::GiveRaise {
            min_rating: 0.0,
            raise_percent: -120.0,
        },
    );
    match result {
        Err(RosterError::InvalidSalary { .. }) => println!("✓ Pay cut below zero rejected"),
        other => println!("✗ Unexpected outcome: {:?}", other),
    }
    println!(
        "  Engineering average still {:.2}",
        store.average_salary_by_department("engineering")
    );

    // ===== Part 4: Observed Events =====
    println!("\n## Part 4: Observed events\n");

    for event in recorder.events() {
        let status = match event.error() {
            Some(err) => err.code(),
            None => "ok",
        };
        println!(
            "  {:<10} {:<8} {}",
            event.op,
            event.employee_id.as_deref().unwrap_or("-"),
            status
        );
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
