
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::CfgError;


/* The configuration file is plain INI: [section] headers, key = value lines and
comment lines starting with '#' or ';'.  Section names keep their case; keys are
lower-cased on read, which matches the reader the pipeline historically used.
No ordering semantics beyond human readability, so the document compares equal
regardless of the order sections and keys appear in. */
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IniDocument {
	sections: HashMap<String, HashMap<String, String>>,
}

impl IniDocument {

	pub fn parse_file<P: AsRef<Path>>(path:P) -> Result<Self, CfgError> {
		let text:String = fs::read_to_string(path)?;
		Self::parse_str(&text)
	}

	pub fn parse_str(text:&str) -> Result<Self, CfgError> {
		let mut sections:HashMap<String, HashMap<String, String>> = HashMap::new();
		let mut current:Option<String> = None;

		for (idx, raw_line) in text.lines().enumerate() {
			let line_no:usize = idx + 1;
			let line:&str = raw_line.trim();

			if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
				continue;
			}

			if line.starts_with('[') {
				if !line.ends_with(']') {
					return Err(CfgError::Syntax{ line: line_no, msg: format!("unterminated section header '{}'", line) });
				}
				let name:&str = line[1..line.len()-1].trim();
				if name.is_empty() {
					return Err(CfgError::Syntax{ line: line_no, msg: "empty section name".to_owned() });
				}
				if sections.contains_key(name) {
					return Err(CfgError::DuplicateSection{ name: name.to_owned(), line: line_no });
				}
				sections.insert(name.to_owned(), HashMap::new());
				current = Some(name.to_owned());
				continue;
			}

			// Anything else must be a key = value line inside a section
			let section:&str = match &current {
				Some(name) => name,
				None => return Err(CfgError::Syntax{ line: line_no, msg: format!("key/value line '{}' before any section header", line) }),
			};

			let mut parts = line.splitn(2, '=');
			let key:String = parts.next().unwrap_or("").trim().to_lowercase();
			let value:&str = match parts.next() {
				Some(v) => v.trim(),
				None => return Err(CfgError::Syntax{ line: line_no, msg: format!("expected 'key = value' but found '{}'", line) }),
			};
			if key.is_empty() {
				return Err(CfgError::Syntax{ line: line_no, msg: "empty key".to_owned() });
			}

			let entries:&mut HashMap<String, String> = sections.get_mut(section).unwrap();
			if entries.contains_key(&key) {
				return Err(CfgError::DuplicateKey{ section: section.to_owned(), key, line: line_no });
			}
			entries.insert(key, value.to_owned());
		}

		Ok(Self{ sections })
	}

	pub fn get(&self, section:&str, key:&str) -> Option<&str> {
		self.sections.get(section).and_then(|s| s.get(key)).map(|v| v.as_str())
	}

	pub fn section(&self, name:&str) -> Option<&HashMap<String, String>> {
		self.sections.get(name)
	}

	pub fn section_names(&self) -> Vec<&str> {
		let mut names:Vec<&str> = self.sections.keys().map(|k| k.as_str()).collect();
		names.sort();
		names
	}

	pub fn keys(&self, section:&str) -> Vec<&str> {
		let mut keys:Vec<&str> = match self.sections.get(section) {
			Some(s) => s.keys().map(|k| k.as_str()).collect(),
			None => vec![],
		};
		keys.sort();
		keys
	}

	/// Serializes back to INI text with sections and keys in sorted order; comments
	/// and original whitespace are not preserved
	pub fn to_ini_string(&self) -> String {
		let mut out = String::new();
		for name in self.section_names() {
			out.push_str(&format!("[{}]\n", name));
			for key in self.keys(name) {
				out.push_str(&format!("{} = {}\n", key, self.sections[name][key]));
			}
			out.push('\n');
		}
		out
	}

}
