use crate::run::Run;
use crate::Result;

/// Turns the bytes nmap wrote to stdout into a [`Run`].
pub trait OutputParser: Send + Sync {
    fn parse(&self, output: &[u8]) -> Result<Run>;
}

/// Parser for nmap's `-oX` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlOutputParser;

impl OutputParser for XmlOutputParser {
    fn parse(&self, output: &[u8]) -> Result<Run> {
        Ok(quick_xml::de::from_reader(output)?)
    }
}

/// Parses an nmap XML report, e.g. one saved with `-oX report.xml`.
pub fn parse_xml(output: &[u8]) -> Result<Run> {
    XmlOutputParser.parse(output)
}
