// ============================================================================
// Basic Usage Example
// ============================================================================

use checked_runtime::numeric::Magnitude;
use checked_runtime::prelude::*;

fn main() {
    // Overflow traps are logged at debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== Checked Runtime Example ===\n");

    // Pure arithmetic on declared types
    let a = I16::new(20).unwrap();
    let b = I16::new(10).unwrap();
    println!("{} + {} = {}", a, b, a.checked_add(b).unwrap());
    let (c, d) = (I16::new(-7).unwrap(), I16::new(2).unwrap());
    println!("{} / {} = {} (floor)", c, d, c.checked_div(d).unwrap());

    // Overflow is an error carrying the exact result and the bounds
    println!("\nOverflow:");
    match I16::MAX.checked_add(I16::ONE) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(err) => println!("  {}", err),
    }
    match U64::new(3).unwrap().checked_pow(U64::new(1_000_000).unwrap()) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(err) => println!("  {}", err),
    }
    match U8::new(200).unwrap().checked_div(U8::ZERO) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(err) => println!("  {}", err),
    }
    match F32::from_magnitude(3.5e38) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(err) => println!("  {}", err),
    }

    // Compound assignment through a cell
    println!("\nCells:");
    let mut x = Mut::new(I32::new(20).unwrap());
    x.add_assign(I32::new(10).unwrap())
        .and_then(|x| x.mul_assign(I32::new(2).unwrap()))
        .unwrap();
    println!("  x = (20 + 10) * 2 = {}", x);

    let mut small = Mut::new(U8::new(250).unwrap());
    if let Err(err) = small.add_assign(U8::new(10).unwrap()) {
        println!("  rejected: {} (cell still holds {})", err, small);
    }

    // Ranges over checked values
    let squares: Vec<String> = U8::new(1)
        .unwrap()
        .range_to(U8::new(6).unwrap())
        .filter_map(|v| v.checked_mul(v).ok())
        .map(|v| v.to_string())
        .collect();
    println!("  squares: {}", squares.join(", "));

    // Success/failure containers
    println!("\nExceptions:");
    let parsed: Exception<I16, String> = Exception::from_parts(Some(a), None).unwrap();
    let failed: Exception<I16, String> = Exception::Failure("bad input".to_string());
    println!("  {:?} -> get = {:?}", parsed, parsed.get());
    println!("  {:?} -> get = {:?}", failed, failed.get().map_err(|e| e.to_string()));
    println!("  mixed comparison: {:?}", parsed.try_eq(&failed).map_err(|e| e.to_string()));

    // Magnitudes validated against a type chosen at run time
    println!("\nDynamic validation:");
    let conventional = RuntimeConfig::conventional();
    let source = RuntimeConfig::source_compatible();
    let cases = [
        ("Int8", Magnitude::from(127)),
        ("u16", Magnitude::from(65_535)),
        ("Int32", Magnitude::Float(1.5)),
        ("f32", Magnitude::Float(1e39)),
    ];
    for (name, magnitude) in cases {
        let Some(ty) = NumericType::from_name(name) else {
            continue;
        };
        let show = |r: NumericResult<()>| match r {
            Ok(()) => "ok".to_string(),
            Err(err) => format!("error: {}", err),
        };
        println!(
            "  {:>8} {:>8}  conventional: {:<40} source-compatible: {}",
            ty.name(),
            magnitude,
            show(conventional.check(ty, &magnitude)),
            show(source.check(ty, &magnitude)),
        );
    }

    // Floats take part in bitwise operations through their integral value
    println!("\nFloat bitwise:");
    let six = F64::new(6.0).unwrap();
    println!("  6 | 3 = {:?}", six.bit_or(F64::new(3.0).unwrap()).map(|v| v.value()));
    println!("  6.5 | 3 = {:?}", F64::new(6.5).unwrap().bit_or(six).map_err(|e| e.to_string()));
}
