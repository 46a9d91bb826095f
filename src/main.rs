use chrono::Local;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::io::Write;
use xiangqi::board::Board;
use xiangqi::display_format::DisplayFormat;
use xiangqi::piece::PieceKind;
use xiangqi::position::{Move, Position};

#[derive(Parser)]
struct Arguments {
    #[clap(
        short,
        long,
        default_value_t = false,
        help = "render pieces as letters instead of chinese characters"
    )]
    ascii: bool,
    #[clap(short, long, default_value_t = false, help = "disable colored output")]
    plain: bool,
    #[clap(short, long, help = "starting position as fen, empty board if not specified")]
    fen: Option<String>,
    #[clap(short, long, default_value_t = false, help = "start from the standard opening position")]
    opening: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "place a piece, replacing any occupant, e.g. 'add rook red 4,1'")]
    Add {
        kind: PieceKind,
        color: String,
        position: Position,
    },
    #[command(alias = "m", about = "attempt a move, e.g. 'move 4,1-4,9'")]
    Move { mv: Move },
    #[command(about = "print the current board")]
    Show,
    #[command(about = "print the current position as fen")]
    Fen,
    #[command(about = "remove every piece")]
    Clear,
    #[command(about = "quit")]
    End,
}

fn main() {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .init();

    if arguments.ascii {
        DisplayFormat::set_default_chinese(false);
    }
    if arguments.plain {
        DisplayFormat::set_default_color(false);
    }

    let mut board = if let Some(fen) = &arguments.fen {
        let Some(board) = Board::from_fen(fen) else {
            println!("invalid fen '{fen}'");
            return;
        };
        board
    } else if arguments.opening {
        Board::opening()
    } else {
        Board::new()
    };

    println!("{board}");

    loop {
        match read_input() {
            Command::Add { kind, color, position } => {
                let red = match color.to_ascii_lowercase().as_str() {
                    "red" => true,
                    "black" => false,
                    _ => {
                        println!("unknown color '{color}'");
                        continue;
                    }
                };

                board.add_piece(kind, red, position);
                info!("placed {color} {kind:?} at {position}");
            }
            Command::Move { mv } => {
                let had_red = has_general(&board, true);
                let had_black = has_general(&board, false);

                if !board.move_piece(mv.from, mv.to) {
                    println!("illegal move");
                    continue;
                }

                info!("played {mv}");
                println!("{board}");

                if had_black && !has_general(&board, false) {
                    println!("black general captured - red wins");
                } else if had_red && !has_general(&board, true) {
                    println!("red general captured - black wins");
                }
            }
            Command::Show => println!("{board}"),
            Command::Fen => println!("{}", board.fen()),
            Command::Clear => board.clear(),
            Command::End => return,
        }
    }
}

fn has_general(board: &Board, red: bool) -> bool {
    board
        .pieces()
        .any(|piece| piece.kind() == PieceKind::General && piece.is_red() == red)
}

fn read_input<T: clap::FromArgMatches + clap::Subcommand>() -> T {
    loop {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            std::process::exit(0);
        }

        let parts = line.split_whitespace();

        #[derive(Parser)]
        #[command(
            name = "",
            no_binary_name = true,
            disable_help_flag = true,
            disable_version_flag = true,
            next_line_help = false,
            help_template = "{usage-heading} {usage}\n{all-args}"
        )]
        struct Input<T: clap::FromArgMatches + clap::Subcommand> {
            #[command(subcommand)]
            command: T,
        }

        match Input::<T>::try_parse_from(parts) {
            Ok(Input { command }) => return command,
            Err(err) => {
                print!("{}", err);
                continue;
            }
        };
    }
}
