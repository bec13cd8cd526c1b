/// Wraps `lines` in a cowsay-style speech bubble.
pub fn speech_bubble(lines: &[String]) -> String {
	let lines: Vec<&str> = if lines.is_empty() {
		vec![""]
	} else {
		lines.iter().map(String::as_str).collect()
	};
	let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
	let last = lines.len() - 1;
	let mut out = Vec::with_capacity(lines.len() + 2);
	out.push(format!(" {}", "_".repeat(width + 2)));
	for (i, line) in lines.iter().enumerate() {
		let (open, close) = match i {
			_ if last == 0 => ('<', '>'),
			0 => ('/', '\\'),
			i if i == last => ('\\', '/'),
			_ => ('|', '|'),
		};
		out.push(format!("{} {:<width$} {}", open, line, close, width = width));
	}
	out.push(format!(" {}", "-".repeat(width + 2)));
	out.join("\n")
}
