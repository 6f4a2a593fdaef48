use crate::models::{Language, Tip};

/// "Did you know?" tips for a language. Every language carries the same ids.
pub fn farming_tips(language: Language) -> Vec<Tip> {
    match language {
        Language::En => vec![
            Tip::new(
                "tip1",
                "Companion Planting Benefits",
                "Plant marigolds with tomatoes to naturally repel pests. Basil improves tomato flavor when grown nearby. This practice reduces the need for chemical pesticides.",
                "Organic Farming",
            ),
            Tip::new(
                "tip2",
                "Water Conservation Tip",
                "Mulching around plants retains soil moisture and reduces water needs by up to 50%. Use organic materials like straw or grass clippings.",
                "Water Management",
            ),
            Tip::new(
                "tip3",
                "Soil Health Secret",
                "Adding earthworms to your soil improves drainage and nutrient availability. One earthworm can process its own body weight in organic matter daily.",
                "Soil Management",
            ),
            Tip::new(
                "tip4",
                "Natural Fertilizer",
                "Banana peels are rich in potassium. Bury them near plants or make liquid fertilizer by soaking in water for 2 weeks.",
                "Organic Fertilizers",
            ),
            Tip::new(
                "tip5",
                "Pest Prevention",
                "Planting diverse crops creates a natural pest control system. Monocultures attract more pests than diverse gardens.",
                "Pest Control",
            ),
        ],
        Language::Hi => vec![
            Tip::new(
                "tip1",
                "साथी पौधे लगाने के फायदे",
                "टमाटर के साथ गेंदे के फूल लगाएं ताकि कीड़े प्राकृतिक रूप से दूर रहें। तुलसी टमाटर के स्वाद को बेहतर बनाती है जब पास में उगाई जाती है।",
                "जैविक खेती",
            ),
            Tip::new(
                "tip2",
                "पानी बचाने का तरीका",
                "पौधों के चारों ओर मल्चिंग करने से मिट्टी की नमी बनी रहती है और पानी की जरूरत 50% तक कम हो जाती है।",
                "जल प्रबंधन",
            ),
            Tip::new(
                "tip3",
                "मिट्टी स्वास्थ्य का राज",
                "अपनी मिट्टी में केंचुए मिलाने से जल निकासी और पोषक तत्वों की उपलब्धता बेहतर होती है।",
                "मृदा प्रबंधन",
            ),
            Tip::new(
                "tip4",
                "प्राकृतिक उर्वरक",
                "केले के छिलकों में पोटेशियम भरपूर होता है। उन्हें पौधों के पास दबाएं या 2 सप्ताह पानी में भिगोकर तरल उर्वरक बनाएं।",
                "जैविक उर्वरक",
            ),
            Tip::new(
                "tip5",
                "कीट नियंत्रण",
                "विविध फसलें लगाने से प्राकृतिक कीट नियंत्रण प्रणाली बनती है। एकल फसल में अधिक कीड़े आते हैं।",
                "कीट नियंत्रण",
            ),
        ],
        Language::Or => vec![
            Tip::new(
                "tip1",
                "ସାଥୀ ଗଛ ଲଗାଇବାର ଲାଭ",
                "ଟମାଟୋ ସହିତ ଗାଙ୍ଗୁଣୀ ଫୁଲ ଲଗାନ୍ତୁ ଯାହା ପ୍ରାକୃତିକ ଭାବରେ କୀଟପତଙ୍ଗ ଦୂରେଇ ରଖେ। ତୁଳସୀ ପାଖରେ ବଢ଼ିଲେ ଟମାଟୋର ସ୍ୱାଦ ବଢ଼ାଏ।",
                "ଜୈବିକ ଚାଷ",
            ),
            Tip::new(
                "tip2",
                "ପାଣି ସଞ୍ଚୟ ଉପାୟ",
                "ଗଛମାନଙ୍କ ଚାରିପାଖରେ ମଲଚିଂ କଲେ ମାଟିର ଆର୍ଦ୍ରତା ବଜାୟ ରହେ ଏବଂ ପାଣି ଆବଶ୍ୟକତା ୫୦% ପର୍ଯ୍ୟନ୍ତ କମ୍ ହୁଏ।",
                "ଜଳ ପରିଚାଳନା",
            ),
            Tip::new(
                "tip3",
                "ମାଟି ସ୍ୱାସ୍ଥ୍ୟର ରହସ୍ୟ",
                "ଆପଣଙ୍କ ମାଟିରେ କେଞ୍ଚୁଆ ମିଶାଇଲେ ଜଳ ନିଷ୍କାସନ ଏବଂ ପୋଷକ ତତ୍ତ୍ୱର ଉପଲବ୍ଧତା ବଢ଼େ।",
                "ମୃତ୍ତିକା ପରିଚାଳନା",
            ),
            Tip::new(
                "tip4",
                "ପ୍ରାକୃତିକ ସାର",
                "କଦଳୀ ଚୋପାରେ ପୋଟାସିୟମ୍ ଭରପୂର ଥାଏ। ସେଗୁଡ଼ିକୁ ଗଛ ପାଖରେ ପୋତି ଦିଅନ୍ତୁ କିମ୍ବା ୨ ସପ୍ତାହ ପାଣିରେ ଭିଜାଇ ତରଳ ସାର ତିଆରି କରନ୍ତୁ।",
                "ଜୈବିକ ସାର",
            ),
            Tip::new(
                "tip5",
                "କୀଟ ପ୍ରତିରୋଧ",
                "ବିବିଧ ଫସଲ ଲଗାଇଲେ ପ୍ରାକୃତିକ କୀଟ ନିୟନ୍ତ୍ରଣ ବ୍ୟବସ୍ଥା ସୃଷ୍ଟି ହୁଏ। ଏକକ ଫସଲରେ ଅଧିକ କୀଟପତଙ୍ଗ ଆସନ୍ତି।",
                "କୀଟ ନିୟନ୍ତ୍ରଣ",
            ),
        ],
    }
}
