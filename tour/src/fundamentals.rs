//! Chapter one: collections, optionals, construction, closures, matching.

use exhibit::demo;
use std::cell::{OnceCell, RefCell};

// ---------------------------------------------------------------------------
// Collections and optionals
// ---------------------------------------------------------------------------

/// Linear search returning the index of the first match, if any.
fn find_index(needle: &str, haystack: &[&str]) -> Option<usize> {
    for (index, value) in haystack.iter().enumerate() {
        if *value == needle {
            return Some(index);
        }
    }
    None
}

#[demo(chapter = "fundamentals", tags = "collections")]
fn array_enumeration() -> String {
    let names = ["Ian", "Ben", "Elisabeth"];
    let mut copied = Vec::with_capacity(names.len());
    for (_index, name) in names.iter().enumerate() {
        copied.push(*name);
    }
    format!("copied {copied:?}")
}

#[demo(chapter = "fundamentals", tags = "collections, optionals")]
fn array_search() -> String {
    match find_index("Ian", &["Ben", "Ian"]) {
        Some(index) => format!("found at index {index}"),
        None => "not found".to_string(),
    }
}

/// Branch on presence before touching the value.
#[demo(chapter = "fundamentals", tags = "optionals")]
fn optional_binding() -> String {
    let index = find_index("Ian", &["Ben", "Ian"]);

    if let Some(index) = index {
        format!("yep, index is {index}")
    } else {
        "nope".to_string()
    }
}

struct Address {
    building_number: Option<String>,
    street_name: Option<String>,
    apartment_number: Option<String>,
}

struct Residence {
    address: Option<Address>,
}

struct Person {
    residence: Option<Residence>,
}

/// Every link in the chain may be absent; `and_then` short-circuits on the
/// first missing one.
#[demo(chapter = "fundamentals", tags = "optionals")]
fn optional_chaining() -> String {
    let person = Person {
        residence: Some(Residence {
            address: Some(Address {
                building_number: Some("123".to_string()),
                street_name: Some("Main St.".to_string()),
                apartment_number: None,
            }),
        }),
    };

    let address = person
        .residence
        .as_ref()
        .and_then(|residence| residence.address.as_ref());

    let number = address
        .and_then(|address| address.building_number.as_deref())
        .and_then(|number| number.parse::<u32>().ok());

    let street = address
        .and_then(|address| address.street_name.as_deref())
        .unwrap_or("an unknown street");

    let apartment = address
        .and_then(|address| address.apartment_number.as_deref())
        .unwrap_or("no apartment");

    match number {
        Some(number) => format!("building {number} on {street}, {apartment}"),
        None => "no building number".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    fn describe(&self) -> String {
        format!("Color({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[demo(chapter = "fundamentals", tags = "structs")]
fn struct_initialization() -> String {
    let magenta = Color {
        red: 1.3,
        green: 0.3,
        blue: 5.2,
    };
    let red_shade = magenta.red;

    // Tuples cover the lightweight cases
    let light = ("Ian", "Test");

    format!(
        "{} with red shade {red_shade}; tuple starts with {}",
        magenta.describe(),
        light.0
    )
}

// ---------------------------------------------------------------------------
// Vehicles: one capability trait, one factory per variant
// ---------------------------------------------------------------------------

trait Vehicle {
    fn fill_gas_tank(&self) -> String;
}

struct Car {
    paint: Color,
}

struct RaceCar {
    paint: Color,
    turbo: bool,
}

struct FormulaOne {
    paint: Color,
    minimum_weight: u32,
}

fn car(paint: Color) -> Car {
    Car { paint }
}

fn race_car(paint: Color) -> RaceCar {
    RaceCar { paint, turbo: true }
}

/// No turbo in this class.
fn formula_one(paint: Color) -> FormulaOne {
    FormulaOne {
        paint,
        minimum_weight: 642,
    }
}

impl Vehicle for Car {
    fn fill_gas_tank(&self) -> String {
        format!("filling the car painted {}", self.paint.describe())
    }
}

impl Vehicle for RaceCar {
    fn fill_gas_tank(&self) -> String {
        let turbo = if self.turbo { "with" } else { "without" };
        format!(
            "filling the race car painted {} {turbo} turbo",
            self.paint.describe()
        )
    }
}

impl Vehicle for FormulaOne {
    fn fill_gas_tank(&self) -> String {
        format!(
            "filling the formula one painted {}, minimum weight {}",
            self.paint.describe(),
            self.minimum_weight
        )
    }
}

#[demo(chapter = "fundamentals", tags = "traits")]
fn vehicle_capabilities() -> String {
    let paint = Color {
        red: 1.5,
        green: 2.0,
        blue: 4.5,
    };

    let standard = car(paint);
    let racer = race_car(paint);
    let f1 = formula_one(paint);

    format!(
        "{}; {}; {}",
        standard.fill_gas_tank(),
        racer.fill_gas_tank(),
        f1.fill_gas_tank()
    )
}

#[demo(chapter = "fundamentals", tags = "traits")]
fn vehicle_dispatch() -> String {
    fn tune_up(vehicle: &dyn Vehicle) -> String {
        vehicle.fill_gas_tank()
    }

    let paint = Color {
        red: 1.0,
        green: 0.0,
        blue: 0.0,
    };
    let garage: Vec<Box<dyn Vehicle>> = vec![
        Box::new(car(paint)),
        Box::new(race_car(paint)),
        Box::new(formula_one(paint)),
    ];

    let actions: Vec<String> = garage.iter().map(|vehicle| tune_up(vehicle.as_ref())).collect();
    actions.join("; ")
}

// ---------------------------------------------------------------------------
// Lifetimes of values
// ---------------------------------------------------------------------------

/// Created only when it is actually accessed.
#[demo(chapter = "fundamentals", tags = "lazy")]
fn lazy_initialization() -> String {
    let manager: OnceCell<String> = OnceCell::new();

    let before = manager.get().is_some();
    let created = manager.get_or_init(|| "multiplayer manager".to_string());

    format!("initialized before access: {before}; after access: {created}")
}

struct FileGuard<'a> {
    descriptor: String,
    events: &'a RefCell<Vec<String>>,
}

impl<'a> FileGuard<'a> {
    fn open(path: &str, events: &'a RefCell<Vec<String>>) -> Self {
        events.borrow_mut().push(format!("opened {path}"));
        Self {
            descriptor: path.to_string(),
            events,
        }
    }
}

impl Drop for FileGuard<'_> {
    fn drop(&mut self) {
        self.events.borrow_mut().push(format!("closed {}", self.descriptor));
    }
}

/// The close happens on scope exit, on every path.
#[demo(chapter = "fundamentals", tags = "cleanup")]
fn scoped_cleanup() -> String {
    let events = RefCell::new(Vec::new());

    {
        let handle = FileGuard::open("/var/log/demo", &events);
        events.borrow_mut().push(format!("reading {}", handle.descriptor));
    }

    events.borrow_mut().push("scope exited".to_string());
    events.into_inner().join(", ")
}

// ---------------------------------------------------------------------------
// Closures
// ---------------------------------------------------------------------------

#[demo(chapter = "fundamentals", tags = "closures")]
fn closure_sorting() -> String {
    // In place, shortest name first
    let mut clients = ["Pestov", "Test", "ian"];
    clients.sort_by(|a, b| a.len().cmp(&b.len()));

    // Immutably: the original stays put, the copy is sorted
    let permanent_clients = ["Apple", "NSA"];
    let mut sorted_permanent = permanent_clients;
    sorted_permanent.sort_by_key(|name| name.len());

    format!("{clients:?}; permanent {permanent_clients:?} sorted to {sorted_permanent:?}")
}

#[demo(chapter = "fundamentals", tags = "closures")]
fn closure_reduce() -> String {
    let nums = [1, 2, 3, 4, 5, 6];

    let verbose: i32 = nums.iter().fold(0, |current, next| current + next);
    let concise: i32 = nums.iter().sum();

    format!("fold gives {verbose}, sum gives {concise}")
}

// ---------------------------------------------------------------------------
// Enums and matching
// ---------------------------------------------------------------------------

enum TrainStatus {
    OnTime,
    Delayed(u32),
}

fn describe_status(status: &TrainStatus) -> String {
    match status {
        TrainStatus::OnTime => "awesome".to_string(),
        TrainStatus::Delayed(minutes) if (0..=5).contains(minutes) => {
            format!("just a little delay of {minutes} minutes")
        }
        TrainStatus::Delayed(minutes) => format!("damn, late by {minutes}"),
    }
}

/// The associated value travels with the variant.
#[demo(chapter = "fundamentals", tags = "enums")]
fn train_status() -> String {
    let status = TrainStatus::Delayed(4);
    describe_status(&status)
}

#[demo(chapter = "fundamentals", tags = "enums, matching")]
fn pattern_matching() -> String {
    let statuses = [
        TrainStatus::OnTime,
        TrainStatus::Delayed(4),
        TrainStatus::Delayed(10),
    ];

    let described: Vec<String> = statuses.iter().map(describe_status).collect();
    described.join("; ")
}

#[demo(chapter = "fundamentals", tags = "matching")]
fn tuple_matching() -> String {
    let color = (1.0, 1.0, 1.0, 1.0);

    match color {
        (red, green, blue, _) if red == 0.0 && (0.5..=1.0).contains(&green) => {
            format!("greenish with blue {blue}")
        }
        (red, green, blue, alpha) if red == green && green == blue && alpha == 1.0 => {
            "monochrome".to_string()
        }
        _ => "unclassified".to_string(),
    }
}
