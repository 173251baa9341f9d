//! Gnuplot figures for the cycle tables.
//!
//! Presentation adapter only: consumes finished tables and writes one PNG
//! per figure. The work and force curves start at the second sample, since
//! the first row carries no incremental values.

use crate::cycle::adiabatic::AdiabaticTable;
use crate::cycle::schmidt::CycleTable;
use gnuplot::{AxesCommon, Caption, Color, Figure, Fix};

fn save(fg: &mut Figure, file_name: &str) {
    fg.set_terminal("pngcairo", file_name);
    fg.show();
}

/// Plots volume, pressure, work and force variation of a Schmidt analysis.
/// One PNG per figure, named `<prefix>_volume.png` and so on.
pub fn plot_schmidt(prefix: &str, table: &CycleTable) {
    let s = table.samples();
    let angle: Vec<f64> = s.iter().map(|r| r.angle_deg).collect();

    // Volume variation
    let v_c: Vec<f64> = s.iter().map(|r| r.compression_volume).collect();
    let v_total: Vec<f64> = s
        .iter()
        .map(|r| r.compression_volume + r.expansion_volume)
        .collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Volume variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Volume [mm3]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(&angle, &v_total, &[Caption("Expansion volume"), Color("skyblue")]);
        axes.lines(&angle, &v_c, &[Caption("Compression volume"), Color("red")]);
    }
    save(&mut fg, &format!("{}_volume.png", prefix));

    // Circuit pressure
    let p1: Vec<f64> = s.iter().map(|r| r.pressure_phase1).collect();
    let p2: Vec<f64> = s.iter().map(|r| r.pressure_phase2).collect();
    let p3: Vec<f64> = s.iter().map(|r| r.pressure_phase3).collect();
    let p4: Vec<f64> = s.iter().map(|r| r.pressure_phase4).collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Pressure variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Pressure [N/mm2]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(&angle, &p1, &[Caption("P_1"), Color("blue")]);
        axes.lines(&angle, &p2, &[Caption("P_2"), Color("red")]);
        axes.lines(&angle, &p3, &[Caption("P_3"), Color("green")]);
        axes.lines(&angle, &p4, &[Caption("P_4"), Color("orange")]);
    }
    save(&mut fg, &format!("{}_pressure.png", prefix));

    // Mechanical work, in kNm
    let angle_inc = &angle[1..];
    let w1: Vec<f64> = s[1..].iter().map(|r| r.work_compression / 1000.0).collect();
    let w2: Vec<f64> = s[1..].iter().map(|r| r.work_expansion / 1000.0).collect();
    let wr: Vec<f64> = s[1..].iter().map(|r| r.work_net / 1000.0).collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Work variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Work [kNm]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(angle_inc, &w1, &[Caption("W_1"), Color("blue")]);
        axes.lines(angle_inc, &w2, &[Caption("W_2"), Color("red")]);
        axes.lines(angle_inc, &wr, &[Caption("W_R"), Color("green")]);
    }
    save(&mut fg, &format!("{}_work.png", prefix));

    // Piston forces, in kN
    let f_o: Vec<f64> = s[1..].iter().map(|r| r.force_outer / 1000.0).collect();
    let f_u: Vec<f64> = s[1..].iter().map(|r| r.force_inner / 1000.0).collect();
    let f_r: Vec<f64> = s[1..].iter().map(|r| r.force_net / 1000.0).collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Force variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Force [kN]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(angle_inc, &f_o, &[Caption("F_O"), Color("blue")]);
        axes.lines(angle_inc, &f_u, &[Caption("F_U"), Color("red")]);
        axes.lines(angle_inc, &f_r, &[Caption("F_R"), Color("green")]);
    }
    save(&mut fg, &format!("{}_force.png", prefix));
}

/// Plots pressure and work variation of an adiabatic analysis.
pub fn plot_adiabatic(prefix: &str, table: &AdiabaticTable) {
    let s = table.samples();
    let angle: Vec<f64> = s[1..].iter().map(|r| r.angle_deg).collect();

    let p: Vec<f64> = s[1..].iter().map(|r| r.pressure).collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Pressure variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Pressure [N/mm2]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(&angle, &p, &[Caption("P"), Color("blue")]);
    }
    save(&mut fg, &format!("{}_pressure.png", prefix));

    let w_c: Vec<f64> = s[1..].iter().map(|r| r.work_compression / 1000.0).collect();
    let w_e: Vec<f64> = s[1..].iter().map(|r| r.work_expansion / 1000.0).collect();
    let w: Vec<f64> = s[1..].iter().map(|r| r.work_net / 1000.0).collect();
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Work variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Work [kNm]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(&angle, &w_c, &[Caption("dWc"), Color("blue")]);
        axes.lines(&angle, &w_e, &[Caption("dWe"), Color("red")]);
        axes.lines(&angle, &w, &[Caption("dW"), Color("green")]);
    }
    save(&mut fg, &format!("{}_work.png", prefix));
}

/// Plots both pressure signals on one figure for comparison.
pub fn plot_combined(prefix: &str, schmidt: &CycleTable, adiabatic: &AdiabaticTable) {
    let s = schmidt.samples();
    let a = adiabatic.samples();
    let angle: Vec<f64> = s[1..].iter().map(|r| r.angle_deg).collect();
    let p1: Vec<f64> = s[1..].iter().map(|r| r.pressure_phase1).collect();
    let p: Vec<f64> = a[1..].iter().map(|r| r.pressure).collect();

    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Pressure variation", &[]);
        axes.set_x_label("Degrees", &[]);
        axes.set_y_label("Pressure [N/mm2]", &[]);
        axes.set_x_range(Fix(0.0), Fix(360.0));
        axes.lines(&angle, &p1, &[Caption("Schmidt: P_1"), Color("blue")]);
        axes.lines(&angle, &p, &[Caption("Adiabatic: P"), Color("magenta")]);
    }
    save(&mut fg, &format!("{}_pressure.png", prefix));
}
