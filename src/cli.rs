use std::ffi::OsString;
use clap::{crate_version, Arg, ArgAction, Command, ValueHint};

const TEXT_LONG_HELP: &str = "letters, digits, and the punctuation . , ? ! / ( ) & : ; = + - \" @ _
are encoded, other characters are dropped unless `--strict` is given";
const MORSE_LONG_HELP: &str = "patterns of `.` and `-` separated by spaces, with `/` between words;
unrecognized patterns are dropped unless `--strict` is given";

/// Clustered modes that clap would otherwise hand to TEXT whole
const CLUSTERED_MODES: [(&str,[&str;2]);4] = [
    ("-ef", ["-e","-f"]),
    ("-df", ["-d","-f"]),
    ("-eo", ["-e","-o"]),
    ("-do", ["-d","-o"])
];

/// Split a leading `-ef`, `-df`, `-eo`, or `-do` into the subcommand flag and its option.
/// Only the first argument after the program name is a mode, later ones are left alone.
pub fn expand_clustered_mode<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut ans: Vec<OsString> = Vec::new();
    for (i,arg) in args.into_iter().enumerate() {
        let cluster = match arg.to_str() {
            Some(s) if i==1 => CLUSTERED_MODES.iter().find(|(k,_)| *k==s),
            _ => None
        };
        match cluster {
            Some((_,pair)) => ans.extend(pair.iter().map(OsString::from)),
            None => ans.push(arg)
        }
    }
    ans
}

fn text_arg(help: &'static str, long_help: &'static str) -> Arg {
    Arg::new("text").value_name("TEXT").help(help)
        .long_help(long_help)
        .required(false)
        .allow_hyphen_values(true)
}

fn file_arg() -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help("read the whole input from a file")
        .value_hint(ValueHint::FilePath)
        .required(false)
        .conflicts_with("text")
}

fn output_arg() -> Arg {
    Arg::new("output").short('o').long("output").value_name("PATH").help("write to a file instead of stdout")
        .long_help("the file is created, or truncated if it exists")
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn strict_arg() -> Arg {
    Arg::new("strict").long("strict").help("fail on input that cannot be translated")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    let long_help = "morse is invoked with one of the subcommands below.
The short forms `-e` and `-d` can be combined with the options, as in `-ef` or `-eo`.
If neither TEXT nor `--file` is given the input is read from a pipe.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
encode:                `morse -e \"SOS\"`
decode:                `morse -d \"... --- ...\"`
encode from file:      `morse -ef message.txt`
decode from file:      `morse -df message.morse`
encode to file:        `morse -eo message.morse \"HELLO WORLD\"`
decode to file:        `morse -do message.txt \".... . .-.. .-.. ---\"`
round trip:            `morse -e \"cq dx\" | morse -d`";

    let mut main_cmd = Command::new("morse")
        .about("Translates between plain text and Morse code.")
        .after_long_help(long_help)
        .arg_required_else_help(true)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("encode")
            .short_flag('e')
            .arg(text_arg("text to encode", TEXT_LONG_HELP))
            .arg(file_arg())
            .arg(output_arg())
            .arg(strict_arg())
            .about("translate text to Morse code"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("decode")
            .short_flag('d')
            .arg(text_arg("Morse code to decode", MORSE_LONG_HELP))
            .arg(file_arg())
            .arg(output_arg())
            .arg(strict_arg())
            .about("translate Morse code to text"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(Arg::new("shell").short('s').long("shell").value_name("SHELL").help("type of shell")
                .value_parser(["bash", "elv", "fish", "ps1", "zsh"])
                .required(true),
            )
            .about("write shell completions to stdout"),
    );
    main_cmd
}

#[test]
fn clustered_modes() {
    let expand = |v: &[&str]| expand_clustered_mode(v.iter().map(OsString::from)).into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<String>>();
    assert_eq!(expand(&["morse","-ef","in.txt"]),["morse","-e","-f","in.txt"]);
    assert_eq!(expand(&["morse","-do","out.txt","..."]),["morse","-d","-o","out.txt","..."]);
    assert_eq!(expand(&["morse","-e","-ef"]),["morse","-e","-ef"]);
    assert_eq!(expand(&["morse","-d","-.."]),["morse","-d","-.."]);
    assert_eq!(expand(&["morse"]),["morse"]);
}
