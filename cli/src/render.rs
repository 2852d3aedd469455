use engine::Board;

pub fn print_board(board: &Board) {
    let squares = board.squares();
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| squares[row * 3 + col].as_char().to_string())
            .collect();
        println!("| {} |", cells.join(" | "));
    }
}

pub fn print_reference_grid() {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| (row * 3 + col + 1).to_string())
            .collect();
        println!("| {} |", cells.join(" | "));
    }
}
