//! Standalone runner that demonstrates examples for all katas in `src`

mod computation_map;

use computation_map::KATAS_COMPUTATION_MAP;

fn main() {
    println!("=== Katas Computation Map ===");
    for (path, comp_type, determinism) in KATAS_COMPUTATION_MAP.iter() {
        println!("{:<40} | {:<25} | {}", path, comp_type, determinism);
    }

    println!("\n=== Sanity Check Examples ===");

    // Bracket balance examples
    {
        use katas::brackets::balance::is_balanced;

        assert!(is_balanced("{[(<{[]}>)]}"));
        assert!(!is_balanced("[[][]]["));
        println!("Balance example: {:?}", is_balanced("[[][][[]]]"));
    }

    // Control flow examples
    {
        use katas::control_flow::factorial::factorial;
        use katas::control_flow::fizz_buzz::fizz_buzz;
        use katas::control_flow::sum_between::sum_between;

        println!("FizzBuzz example: {}", fizz_buzz(15));
        println!("Factorial example: {:?}", factorial(10));
        println!("Sum between example: {:?}", sum_between(5, 10));
    }

    // Numerical examples
    {
        use katas::numerical::digital_root::digital_root;
        use katas::numerical::luhn::is_luhn_valid;
        use katas::numerical::matrix_multiplication::matrix_product;
        use katas::numerical::radix::to_nary_string;
        use katas::numerical::reverse_integer::reverse_integer;

        let identity = vec![vec![1, 0], vec![0, 1]];
        let m = vec![vec![1, 2], vec![3, 4]];
        if let Some(product) = matrix_product(&identity, &m) {
            println!("Matrix product example: {:?}", product);
        }

        println!("Luhn example: {:?}", is_luhn_valid(4012888888881881));
        println!("Digital root example: {:?}", digital_root(165536));
        println!("Reverse integer example: {:?}", reverse_integer(87354));
        if let Some(binary) = to_nary_string(365, 2) {
            println!("Radix example: {}", binary);
        }
    }

    // Geometry, string and game examples
    {
        use katas::games::tic_tac_toe::{evaluate_position, Player};
        use katas::geometry::circle::{is_inside_circle, Circle, Point};
        use katas::geometry::triangle::is_triangle;
        use katas::string_algorithms::common_path::common_directory_path;
        use katas::string_algorithms::single_char::first_single_char;

        println!("Triangle example: {:?}", is_triangle(3.0, 4.0, 5.0));

        let circle = Circle { center: Point { x: 0.0, y: 0.0 }, radius: 10.0 };
        let point = Point { x: 1.0, y: 1.0 };
        println!("Circle example: {:?}", is_inside_circle(&circle, &point));

        println!("Single char example: {:?}", first_single_char("abracadabra"));

        let paths = ["/web/images/image1.png", "/web/images/image2.png"];
        println!("Common path example: {:?}", common_directory_path(&paths));

        let x = Some(Player::X);
        let board = [
            [x, None, Some(Player::O)],
            [None, x, Some(Player::O)],
            [None, None, x],
        ];
        println!("Tic-tac-toe example: {:?}", evaluate_position(&board));
    }
}
