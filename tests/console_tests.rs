use std::io::Cursor;

use palette_rs::console::{Console, ReportStyle, write_report};
use palette_rs::palettes::color::Color;
use palette_rs::palettes::palette::Palette;

const COUNT_PROMPT: &str = "How many colors would you like to add (max 10)? ";

fn color_prompts(n: usize) -> String {
	format!("Enter RGB values for color {n}: \nRed (0–255): Green (0–255): Blue (0–255): ")
}

fn run_session(input: &str) -> (anyhow::Result<Palette>, String) {
	let mut output: Vec<u8> = Vec::new();
	let result = {
		let mut console = Console::new(Cursor::new(input.as_bytes()), &mut output);
		console.read_palette().and_then(|pal| {
			console.write_report(&pal, ReportStyle::Plain)?;
			Ok(pal)
		})
	};
	(result, String::from_utf8(output).unwrap())
}

#[test]
fn interactive_session() {
	let (result, output) = run_session("3\n255\n0\n0\n0\n0\n255\n255\n0\n0\n");
	let pal = result.unwrap();

	assert_eq!(pal.colors(), &[Color::new(255, 0, 0), Color::new(0, 0, 255), Color::new(255, 0, 0)]);

	let expected = [
		COUNT_PROMPT.to_string(),
		color_prompts(1),
		color_prompts(2),
		color_prompts(3),
		"\n".to_string(),
		"Current Colors in Palette:\n".to_string(),
		"(255, 0, 0)\n".to_string(),
		"(0, 0, 255)\n".to_string(),
		"(255, 0, 0)\n".to_string(),
		"\n".to_string(),
		"Average color: (170, 0, 85)\n".to_string(),
		"Most frequent color: (255, 0, 0)\n".to_string(),
		"Palette size: 3\n".to_string(),
		"Is empty? false\n".to_string(),
	].join("");

	assert_eq!(output, expected);
}

#[test]
fn no_colors() {
	let (result, output) = run_session("0\n");
	assert!(result.unwrap().is_empty());

	let expected = [
		COUNT_PROMPT,
		"\n",
		"Current Colors in Palette:\n",
		"\n",
		"Average color: (0, 0, 0)\n",
		"Most frequent color: (0, 0, 0)\n",
		"Palette size: 0\n",
		"Is empty? true\n",
	].join("");

	assert_eq!(output, expected);
}

#[test]
fn negative_count_adds_nothing() {
	let (result, _) = run_session("-4\n");
	assert!(result.unwrap().is_empty());
}

#[test]
fn count_is_clamped_to_capacity() {
	let mut input = String::from("25\n");
	for i in 0..10 {
		input.push_str(&format!("{i}\n{i}\n{i}\n"));
	}
	// anything past the tenth color is never read
	input.push_str("garbage\n");

	let (result, output) = run_session(&input);
	let mut pal = result.unwrap();

	assert!(pal.is_full());
	assert_eq!(pal.remove_color(), Color::new(9, 9, 9));
	assert!(output.contains("Enter RGB values for color 10: \n"));
	assert!(!output.contains("Enter RGB values for color 11: "));
	assert!(output.ends_with("Palette size: 10\nIs empty? false\n"));
}

#[test]
fn whitespace_around_numbers_is_ignored() {
	let (result, _) = run_session(" 1 \n  10\n20  \n\t30\n");
	assert_eq!(result.unwrap().colors(), &[Color::new(10, 20, 30)]);
}

#[test]
fn invalid_input() {
	let (result, _) = run_session("two\n");
	assert_eq!(result.unwrap_err().to_string(), "\"two\" is not an integer");

	let (result, _) = run_session("1\n255\n256\n0\n");
	assert_eq!(result.unwrap_err().to_string(), "Green value 256 is outside of 0-255");

	let (result, _) = run_session("1\n-1\n");
	assert_eq!(result.unwrap_err().to_string(), "Red value -1 is outside of 0-255");

	let (result, _) = run_session("2\n1\n2\n3\n");
	assert_eq!(result.unwrap_err().to_string(), "Unexpected end of input");

	let (result, _) = run_session("");
	assert_eq!(result.unwrap_err().to_string(), "Unexpected end of input");
}

#[test]
fn json_report() {
	let pal = Palette::try_from(vec![Color::new(255, 0, 0), Color::new(0, 0, 1)]).unwrap();

	let mut output: Vec<u8> = Vec::new();
	write_report(&mut output, &pal, ReportStyle::Json).unwrap();

	let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
	assert_eq!(value["size"], 2);
	assert_eq!(value["is_empty"], false);
	assert_eq!(value["average"], serde_json::json!({ "r": 127, "g": 0, "b": 0 }));
	assert_eq!(value["most_frequent"], serde_json::json!({ "r": 255, "g": 0, "b": 0 }));
	assert_eq!(value["colors"].as_array().unwrap().len(), 2);
}

#[test]
fn swatch_report() {
	colored::control::set_override(true);

	let pal = Palette::try_from(vec![Color::new(1, 2, 3)]).unwrap();

	let mut output: Vec<u8> = Vec::new();
	write_report(&mut output, &pal, ReportStyle::Swatches).unwrap();
	let output = String::from_utf8(output).unwrap();

	assert!(output.starts_with("Current Colors in Palette:\n(1, 2, 3) "));
	assert!(output.contains("\x1b[48;"));
	assert!(output.ends_with("Palette size: 1\nIs empty? false\n"));
}
