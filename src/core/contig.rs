/// Stable index of a contig within a [`SequenceStore`](crate::core::store::SequenceStore).
///
/// Overlaps refer to contigs by index rather than by reference so that the
/// edge list stays valid for as long as the store it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContigId(pub usize);

impl ContigId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ContigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orientation of a contig record when both strands are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// A single sequence record loaded from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    /// Record identifier (first token of the FASTA definition line)
    pub name: String,

    /// Free-text remainder of the definition line
    pub description: String,

    /// Residues, upper-cased
    pub sequence: Vec<u8>,

    /// Set only when the store holds both orientations of every record
    pub strand: Option<Strand>,
}

impl Contig {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            sequence: sequence.into(),
            strand: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = Some(strand);
        self
    }

    /// Identifier used in serialized graphs: `name`, or `+name` / `-name`
    /// for stranded records
    #[must_use]
    pub fn label(&self) -> String {
        match self.strand {
            Some(strand) => format!("{strand}{}", self.name),
            None => self.name.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Last `size` residues, or `None` if the contig is shorter than `size`
    #[must_use]
    pub fn suffix(&self, size: usize) -> Option<&[u8]> {
        let len = self.sequence.len();
        (size <= len).then(|| &self.sequence[len - size..])
    }

    /// First `size` residues, or `None` if the contig is shorter than `size`
    #[must_use]
    pub fn prefix(&self, size: usize) -> Option<&[u8]> {
        self.sequence.get(..size)
    }

    /// Lowercase hex MD5 of the (upper-cased) sequence
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(&self.sequence))
    }

    /// The opposite-strand record of a forward contig.
    ///
    /// The name and description are kept; the strand marks the orientation.
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        let sequence = self
            .sequence
            .iter()
            .rev()
            .map(|&base| complement(base))
            .collect();

        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            sequence,
            strand: Some(Strand::Reverse),
        }
    }
}

/// IUPAC complement of an upper-case residue; unknown symbols map to themselves
fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        other => other,
    }
}
