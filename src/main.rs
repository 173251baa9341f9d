use stirling_cycle_simulator as stirling;
use stirling_cycle_simulator::TableData;

fn main() {
    let file_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "stirling.json".to_string());

    let params = match stirling::io::json_reader::read_parameters(&file_name) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error reading '{}':\n {}", file_name, err);
            std::process::exit(1);
        }
    };
    println!("{}", params);

    let schmidt = match stirling::schmidt_analysis(&params) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Error in Schmidt analysis:\n {}", err);
            std::process::exit(1);
        }
    };
    let adiabatic = match stirling::adiabatic_analysis(&params, &schmidt) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Error in adiabatic analysis:\n {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = std::fs::create_dir_all("results") {
        eprintln!("Error creating 'results' folder:\n {}", err);
        std::process::exit(1);
    }
    let export = stirling::io::csv::write_results_csv("results/schmidt.csv", &schmidt)
        .and_then(|_| stirling::io::csv::write_results_csv("results/adiabatic.csv", &adiabatic));
    if let Err(err) = export {
        eprintln!("Error writing results:\n {}", err);
        std::process::exit(1);
    }

    stirling::plot::figures::plot_schmidt("results/schmidt", &schmidt);
    stirling::plot::figures::plot_adiabatic("results/adiabatic", &adiabatic);
    stirling::plot::figures::plot_combined("results/combined", &schmidt, &adiabatic);

    println!(
        "Schmidt: {} samples, net cycle work {:.3} Nm",
        schmidt.num_rows(),
        schmidt.cycle_work()
    );
    println!(
        "Adiabatic: {} samples, net cycle work {:.3} Nm",
        adiabatic.num_rows(),
        adiabatic.cycle_work()
    );
    println!("The results are saved in: results/");
}
