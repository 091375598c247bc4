use minefield::{Game, SeededRandom, Status};

fn print_game(game: &Game) {
    let snapshot = game.snapshot();
    for y in 0..snapshot.get_height() {
        let mut line = String::new();
        for x in 0..snapshot.get_width() {
            line.push(snapshot.get_char_repr(x, y).unwrap());
            line.push(' ');
        }
        println!("{}", line);
    }
    println!("status: {}", snapshot.get_status());
    println!();
}

fn main() {
    let mut random = SeededRandom::new(4040);
    let mut game = Game::generate_with(16, 16, 40, &mut random).unwrap();

    game.toggle_flag(0, 0).unwrap();
    for &(x, y) in [(8, 8), (1, 14), (14, 2), (3, 3), (12, 12)].iter() {
        let status = game.reveal(x, y).unwrap();
        print_game(&game);
        if status != Status::InProgress {
            break;
        }
    }
}
