// 📄 XML Reader - lowers a bank.xml document into a Node tree
//
// Expected shape (text content is ignored, only elements and attributes matter):
//
//   <bank>
//     <manager name="..." email="..." phone="...">
//       <client id="..." name="...">
//         <credit status="active" value="100">
//           <pay value="30" date="2019-01-10"/>
//         </credit>
//         <deposit status="closed" value="50"/>
//       </client>
//     </manager>
//   </bank>

use crate::error::ParseError;
use crate::tree::Node;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse an XML document into its root node
pub fn parse_str(xml: &str) -> Result<Node, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ParseError::Document(format!(
                "XML error at byte {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => {
                stack.push(element(&start)?);
            }
            Event::Empty(start) => {
                let node = element(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| ParseError::Document("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Eof => break,
            // Text, comments, declarations, processing instructions
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::Document(format!("unclosed element <{}>", open.tag)));
    }

    root.ok_or_else(|| ParseError::Document("document has no root element".to_string()))
}

fn element(start: &BytesStart<'_>) -> Result<Node, ParseError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = Node::new(tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            ParseError::Document(format!("bad attribute on <{}>: {}", node.tag, e))
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::Document(format!("bad value for '{}': {}", key, e)))?
            .into_owned();

        node.attributes.insert(key, value);
    }

    Ok(node)
}

/// Hang a finished node under its parent, or make it the root
fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(ParseError::Document(format!(
            "multiple root elements (second is <{}>)",
            node.tag
        ))),
    }
}

// ============================================================================
// TESTS
// ============================================================================
